use tabula::{config::Config, context::Context, reports::Report};

fn column(the_context: &Context, label: &str) -> Vec<bool> {
    for (column_label, column) in the_context.columns() {
        if column_label == label {
            return column.to_vec();
        }
    }
    panic!("No column labelled {label}");
}

mod tables {

    use super::*;

    #[test]
    fn atom_columns_follow_the_seeding_convention() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(Ok(Report::Table), ctx.evaluate("a∧b∧c"));
        assert_eq!(8, ctx.rows());
        assert_eq!(3, ctx.atom_count());

        // Atom i alternates in blocks of 2^i, beginning true.
        assert_eq!(
            vec![true, false, true, false, true, false, true, false],
            column(&ctx, "a")
        );
        assert_eq!(
            vec![true, true, false, false, true, true, false, false],
            column(&ctx, "b")
        );
        assert_eq!(
            vec![true, true, true, true, false, false, false, false],
            column(&ctx, "c")
        );
    }

    #[test]
    fn connective_semantics_over_two_atoms() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.evaluate("(¬p)∨((p∧q)∨((p→q)∨(p↔q)))").is_ok());

        assert_eq!(vec![true, false, true, false], column(&ctx, "p"));
        assert_eq!(vec![false, true, false, true], column(&ctx, "¬p"));
        assert_eq!(vec![true, false, false, false], column(&ctx, "p∧q"));
        assert_eq!(vec![true, true, false, true], column(&ctx, "p→q"));
        assert_eq!(vec![true, true, false, false], column(&ctx, "q"));
        assert_eq!(vec![true, false, false, true], column(&ctx, "p↔q"));

        assert!(ctx.evaluate("p∨q").is_ok());
        assert_eq!(vec![true, true, true, false], column(&ctx, "p∨q"));
    }

    #[test]
    fn every_subexpression_receives_one_column() {
        let mut ctx = Context::from_config(Config::default());

        // p∧q appears twice but is computed once.
        assert!(ctx.evaluate("(p∧q)∨¬(p∧q)").is_ok());

        let labels = ctx
            .columns()
            .iter()
            .map(|(label, _)| label.to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            vec!["p", "q", "p∧q", "¬(p∧q)", "(p∧q)∨(¬(p∧q))"],
            labels
        );
    }

    #[test]
    fn parenthesization_is_transparent() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.evaluate("(p∧q)").is_ok());
        let parenthesized = column(&ctx, "p∧q");
        let parenthesized_count = ctx.columns().len();

        assert!(ctx.evaluate("p∧q").is_ok());
        assert_eq!(parenthesized, column(&ctx, "p∧q"));
        assert_eq!(parenthesized_count, ctx.columns().len());
    }

    #[test]
    fn reevaluation_is_a_fresh_start() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.evaluate("p∧q∧r").is_ok());
        assert_eq!(8, ctx.rows());

        // A second evaluation shares no keys or rows with the first.
        assert!(ctx.evaluate("p").is_ok());
        assert_eq!(2, ctx.rows());
        assert_eq!(1, ctx.columns().len());
        assert_eq!(vec![true, false], column(&ctx, "p"));
    }

    #[test]
    fn display_order_is_atoms_then_innermost_first() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.evaluate("¬(q∨p)∧s").is_ok());

        let labels = ctx
            .columns()
            .iter()
            .map(|(label, _)| label.to_string())
            .collect::<Vec<_>>();

        // Atoms alphabetically, then by node count.
        assert_eq!(
            vec!["p", "q", "s", "q∨p", "¬(q∨p)", "(¬(q∨p))∧s"],
            labels
        );
    }
}
