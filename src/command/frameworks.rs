//! Frameworks command implementation.
use crate::{ecosystem::framework::Framework, result::Result};

pub fn execute() -> Result<()> {
    print!("{}", render());
    Ok(())
}

/// One line per supported framework, grouped by language in detection
/// order.
pub fn render() -> String {
    let mut out = String::new();
    let mut language = "";

    for framework in Framework::ALL {
        if framework.language() != language {
            language = framework.language();
            out.push_str(&format!("{language}:\n"));
        }
        out.push_str(&format!("  {framework}\n"));
    }

    out
}
