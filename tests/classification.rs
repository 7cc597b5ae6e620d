use tabula::{
    config::Config,
    context::Context,
    reports::{ArgumentReport, Report},
};

mod equivalence {

    use super::*;

    #[test]
    fn conjunction_commutes() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(Ok(Report::Equivalence(true)), ctx.evaluate("p∧q≡q∧p"));
    }

    #[test]
    fn de_morgan() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            Ok(Report::Equivalence(true)),
            ctx.evaluate("¬(p∧q)≡¬p∨¬q")
        );
    }

    #[test]
    fn the_conditional_does_not_convert() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(Ok(Report::Equivalence(false)), ctx.evaluate("p→q≡q→p"));
    }
}

mod argument {

    use super::*;

    #[test]
    fn modus_ponens_is_a_tautology() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            Ok(Report::Argument(ArgumentReport::Tautology)),
            ctx.evaluate("p→q,p⊢q")
        );
    }

    #[test]
    fn affirming_a_disjunct_is_a_fallacy() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            Ok(Report::Argument(ArgumentReport::Fallacy)),
            ctx.evaluate("p∨q⊢p")
        );
    }

    #[test]
    fn an_unsatisfiable_conclusion_is_a_contradiction() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            Ok(Report::Argument(ArgumentReport::Contradiction)),
            ctx.evaluate("p⊢p∧¬p")
        );
    }

    #[test]
    fn unsatisfiable_premises_are_vacuous() {
        let mut ctx = Context::from_config(Config::default());

        // No row satisfies p∧¬p, so the conclusion is unconstrained.
        assert_eq!(
            Ok(Report::Argument(ArgumentReport::Vacuous)),
            ctx.evaluate("p∧¬p⊢q")
        );
    }

    #[test]
    fn premises_may_be_many() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            Ok(Report::Argument(ArgumentReport::Tautology)),
            ctx.evaluate("p→q,q→r,p⊢r")
        );
    }
}

mod ascii {

    use super::*;

    #[test]
    fn modus_ponens_with_ascii_glyphs() {
        let mut ctx = Context::from_config(Config::ascii());

        assert_eq!(
            Ok(Report::Argument(ArgumentReport::Tautology)),
            ctx.evaluate("p->q,p+q")
        );
    }

    #[test]
    fn equivalence_with_ascii_glyphs() {
        let mut ctx = Context::from_config(Config::ascii());

        assert_eq!(Ok(Report::Equivalence(true)), ctx.evaluate("p&q=q&p"));
        assert_eq!(Ok(Report::Equivalence(true)), ctx.evaluate("!(p|q)=!p&!q"));
    }
}
