//! Rendering shared by the flag commands

use crate::cli::CommandContext;
use crate::error::Result;
use crate::flags::Flag;
use crate::models::FlagDisplay;
use crate::output::Formattable;

/// Convert flags to display rows for the context's project and print them.
pub fn print_flags(ctx: &CommandContext, flags: &[Flag]) -> Result<()> {
    let rows: Vec<FlagDisplay> = flags
        .iter()
        .map(|flag| FlagDisplay::new(flag, ctx.base_url(), ctx.project()))
        .collect();
    rows.print(ctx.format)
}

/// Permanent and temporary flag counts, in that order.
pub fn count_by_kind(flags: &[Flag]) -> (usize, usize) {
    let temporary = flags.iter().filter(|f| f.temporary).count();
    (flags.len() - temporary, temporary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::fixtures::flag;

    #[test]
    fn test_count_by_kind() {
        let mut permanent = flag("perm");
        permanent.temporary = false;
        let flags = vec![permanent, flag("temp-a"), flag("temp-b")];

        assert_eq!(count_by_kind(&flags), (1, 2));
        assert_eq!(count_by_kind(&[]), (0, 0));
    }
}
