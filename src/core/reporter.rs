use crate::domain::model::RunResults;

/// Console summary: counts per status plus a listing of every unclaimed
/// code. Mirrors the per-record progress output's tone.
pub fn print_summary(results: &RunResults) {
    println!("\n{}", "=".repeat(60));
    println!("ANALYSIS RESULTS");
    println!("{}", "=".repeat(60));

    println!("\n📊 SUMMARY:");
    println!("   Valid (Unclaimed): {}", results.valid.len());
    println!("   Invalid (Claimed): {}", results.invalid.len());
    println!("   Errors: {}", results.errors.len());
    println!("   Unknown: {}", results.unknown.len());
    println!("   Total: {}", results.total());

    if !results.valid.is_empty() {
        println!("\n✅ VALID/UNCLAIMED CODES ({}):", results.valid.len());
        println!("{}", "-".repeat(40));
        for outcome in &results.valid {
            println!("   Code: {}", outcome.record.code);
            println!("   URL:  {}\n", outcome.record.url);
        }
    }
}

/// Render the persisted report. Pure: identical results render to identical
/// bytes, so rewriting the file on every run is safe.
pub fn render_report(results: &RunResults) -> String {
    let mut report = String::new();

    report.push_str("REFERRAL CODE ANALYSIS RESULTS\n");
    report.push_str(&"=".repeat(50));
    report.push_str("\n\n");
    report.push_str(&format!("Total Codes Checked: {}\n\n", results.total()));

    if !results.valid.is_empty() {
        report.push_str("VALID/UNCLAIMED CODES:\n");
        report.push_str(&"-".repeat(30));
        report.push('\n');
        for outcome in &results.valid {
            report.push_str(&format!("Code: {}\n", outcome.record.code));
            report.push_str(&format!("URL: {}\n\n", outcome.record.url));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CheckOutcome, ReferralRecord, ReferralStatus};

    fn results_with_valid(codes: &[&str]) -> RunResults {
        let mut results = RunResults::default();
        for code in codes {
            results.push(CheckOutcome {
                record: ReferralRecord {
                    url: format!("https://cursor.com/referral?code={}", code),
                    name: "Unknown".to_string(),
                    code: code.to_string(),
                },
                status: ReferralStatus::Valid,
            });
        }
        results
    }

    #[test]
    fn test_report_lists_valid_codes() {
        let mut results = results_with_valid(&["AAA", "BBB"]);
        results.push(CheckOutcome {
            record: ReferralRecord {
                url: "https://cursor.com/referral?code=CCC".to_string(),
                name: "Unknown".to_string(),
                code: "CCC".to_string(),
            },
            status: ReferralStatus::Invalid,
        });

        let report = render_report(&results);

        assert!(report.contains("Total Codes Checked: 3"));
        assert!(report.contains("VALID/UNCLAIMED CODES:"));
        assert!(report.contains("Code: AAA"));
        assert!(report.contains("URL: https://cursor.com/referral?code=BBB"));
        // only valid codes are listed
        assert!(!report.contains("Code: CCC"));
    }

    #[test]
    fn test_report_without_valid_codes_has_no_listing() {
        let mut results = RunResults::default();
        results.push(CheckOutcome {
            record: ReferralRecord {
                url: "https://cursor.com/referral?code=AAA".to_string(),
                name: "Unknown".to_string(),
                code: "AAA".to_string(),
            },
            status: ReferralStatus::Unknown,
        });

        let report = render_report(&results);

        assert!(report.contains("Total Codes Checked: 1"));
        assert!(!report.contains("VALID/UNCLAIMED CODES"));
        assert!(!report.contains("Code:"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let results = results_with_valid(&["AAA", "BBB", "CCC"]);
        assert_eq!(render_report(&results), render_report(&results));
    }

    #[test]
    fn test_report_preserves_input_order() {
        let results = results_with_valid(&["ZZZ", "AAA"]);
        let report = render_report(&results);
        let zzz = report.find("Code: ZZZ").unwrap();
        let aaa = report.find("Code: AAA").unwrap();
        assert!(zzz < aaa);
    }
}
