//! Terminal summary of a run.
//!
//! Formatting lives here so the pipeline code stays free of presentation
//! and output changes stay localized.

use crate::aggregate::Aggregation;

const RULE_WIDTH: usize = 30;
const PREVIEW_COUNT: usize = 5;

/// Format the processing summary: totals, removal reasons, and a preview of
/// the first kept names.
pub fn format_summary(agg: &Aggregation, sources: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\nProcessing Summary\n{rule}\n"));
    out.push_str(&format!(
        "Input files: {sources}\nTotal names processed: {}\nTotal names removed: {}\nNames kept: {}\n",
        agg.total,
        agg.removed(),
        agg.kept()
    ));

    out.push_str(&format!("\nRemoval reasons:\n{thin}\n"));
    for (reason, count) in agg.tally.most_common() {
        out.push_str(&format!("{:<20} - {count:>7}\n", reason.label()));
    }
    out.push_str(&format!("{thin}\n"));

    if !agg.vocabulary.is_empty() {
        let shown = agg.vocabulary.len().min(PREVIEW_COUNT);
        out.push_str(&format!("\nFirst {shown} processed names:\n"));
        for name in agg.vocabulary.iter().take(PREVIEW_COUNT) {
            out.push_str(&format!("  {name}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReasonTally, RejectionReason};

    #[test]
    fn summary_lists_counts_and_reasons() {
        let mut tally = ReasonTally::new();
        tally.touch(RejectionReason::Duplicate);
        tally.record(RejectionReason::TooShort);
        tally.record(RejectionReason::TooShort);
        tally.record(RejectionReason::EmptyOrNaN);

        let agg = Aggregation {
            vocabulary: vec!["beef stew".to_string(), "chicken soup".to_string()],
            tally,
            total: 5,
        };
        let text = format_summary(&agg, 1);

        assert!(text.contains("Total names processed: 5"));
        assert!(text.contains("Total names removed: 3"));
        assert!(text.contains("Names kept: 2"));
        assert!(text.contains("Too short            -       2\n"));
        assert!(text.contains("Duplicates           -       0\n"));
        assert!(text.contains("First 2 processed names:\n  beef stew\n  chicken soup\n"));

        let too_short = text.find("Too short").unwrap();
        let empty = text.find("Empty or NaN").unwrap();
        assert!(too_short < empty);
    }

    #[test]
    fn empty_vocabulary_has_no_preview() {
        let agg = Aggregation::default();
        assert!(!format_summary(&agg, 0).contains("processed names:"));
    }
}
