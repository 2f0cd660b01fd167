//! Placeholder substitution for log templates
//!
//! Templates use `{}` as a positional placeholder. Substitution never fails:
//! placeholders without a matching argument stay as literal `{}`, and surplus
//! arguments are appended after the template with no separator.

use std::fmt::{Display, Write};

const PLACEHOLDER: &str = "{}";

/// Substitute `args` into the `{}` placeholders of `template`, left to right.
///
/// # Examples
///
/// ```
/// use oak_logger::format_template;
///
/// assert_eq!(format_template("Hello {}", &[&"World"]), "Hello World");
/// assert_eq!(format_template("{} {} {}", &[&1, &2]), "1 2 {}");
/// assert_eq!(format_template("{}", &[&1, &2]), "12");
/// ```
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    let mut output = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(PLACEHOLDER) {
        output.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => {
                // Writing into a String cannot fail
                let _ = write!(output, "{}", arg);
            }
            None => output.push_str(PLACEHOLDER),
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    output.push_str(rest);

    for arg in args {
        let _ = write!(output, "{}", arg);
    }

    output
}
