//! Human-readable rendering of formula check results.

use cellform_core::{Formula, FormulaFormatError};

use crate::styles::{ICON_CARET, Styles};

/// One line for an accepted formula: `✓ <canonical>`.
pub fn render_accepted(styles: &Styles, formula: &Formula) -> String {
    format!("{} {}", styles.pass_icon(), styles.bold(formula.as_str()))
}

/// One line for an accepted formula when the canonical form is hidden.
pub fn render_accepted_input(styles: &Styles, input: &str) -> String {
    format!("{} {}", styles.pass_icon(), input)
}

/// Renders a rejection: a headline, then the input with a caret under the
/// offending position when the error has one.
///
/// ```text
/// ✖ 67 76: '76' at position 3 cannot follow '67' (...) [extra-following]
///     67 76
///        ^
/// ```
pub fn render_rejected(styles: &Styles, input: &str, err: &FormulaFormatError) -> String {
    let mut out = format!(
        "{} {}: {} {}",
        styles.fail_icon(),
        input,
        styles.fail(&err.to_string()),
        styles.rule(err.rule())
    );
    if let Some(offset) = err.offset() {
        out.push('\n');
        out.push_str("    ");
        out.push_str(input);
        out.push('\n');
        out.push_str("    ");
        out.push_str(&" ".repeat(caret_column(input, offset)));
        out.push_str(&styles.fail(ICON_CARET));
    }
    out
}

/// Display column of a byte offset, counting characters before it.
fn caret_column(input: &str, offset: usize) -> usize {
    let offset = offset.min(input.len());
    input
        .char_indices()
        .take_while(|(i, _)| *i < offset)
        .map(|(_, c)| if c == '\t' { 4 } else { 1 })
        .sum()
}
