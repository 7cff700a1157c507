/// Elements whose text is collected from the result page, in document order.
pub const TEXT_SELECTOR: &str = "div, p, span";

/// Trims every block and drops the empty ones, keeping order.
pub fn visible_blocks<I, S>(blocks: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks
        .into_iter()
        .map(|b| b.as_ref().trim().to_string())
        .filter(|b| !b.is_empty())
        .collect()
}

/// The current tracking snapshot: the first non-empty block, or an empty string.
///
/// Only the first block counts, even though a layout change upstream could reorder them.
pub fn snapshot<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    visible_blocks(blocks).into_iter().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_block_wins() {
        assert_eq!(snapshot(["Colis livré", "Autre texte"]), "Colis livré");
    }

    #[test]
    fn skips_blank_blocks() {
        assert_eq!(
            visible_blocks(["", "   ", "\n Colis en transit \t", "x"]),
            vec!["Colis en transit", "x"]
        );
        assert_eq!(snapshot(["", "  ", " Colis en transit "]), "Colis en transit");
    }

    #[test]
    fn nothing_is_empty() {
        assert_eq!(snapshot(Vec::<String>::new()), "");
        assert_eq!(snapshot(["", " "]), "");
    }
}
