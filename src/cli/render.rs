use tabula::context::Context;

/// Prints the columns of `the_context` as an aligned table, one assignment per row.
///
/// Labels head the columns, cells are `T` or `F`, and the display order of the context is kept: atoms first, then sub-expressions innermost-first.
pub fn print_table(the_context: &Context) {
    let columns = the_context.columns();
    if columns.is_empty() {
        return;
    }

    // Width by character count, which is enough for single-width glyphs.
    let widths = columns
        .iter()
        .map(|(label, _)| label.chars().count())
        .collect::<Vec<_>>();

    let header = columns
        .iter()
        .map(|(label, _)| label.to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{header}");

    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");
    println!("{rule}");

    for row in 0..the_context.rows() {
        let cells = columns
            .iter()
            .zip(&widths)
            .map(|((_, column), &width)| {
                let value = match column[row] {
                    true => "T",
                    false => "F",
                };
                format!("{value:<width$}")
            })
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{cells}");
    }
}
