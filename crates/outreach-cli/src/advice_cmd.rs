//! `outreach advice`: regional cultural guidance.

use std::fmt::Write as _;

use anyhow::Result;

use outreach_core::{Region, region_advice};

/// Execute `outreach advice`.
pub fn run_advice(region: Region, all: bool) -> Result<()> {
    let regions: Vec<Region> = if all { Region::ALL.to_vec() } else { vec![region] };
    print!("{}", render_advice(&regions));
    Ok(())
}

fn render_advice(regions: &[Region]) -> String {
    let mut out = String::new();
    for (i, region) in regions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{region}");
        for note in region_advice(*region) {
            let _ = writeln!(out, "  ? {note}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_region_has_header_and_three_notes() {
        let text = render_advice(&[Region::SouthAsia]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "South Asia");
        assert_eq!(lines[3], "  ? Follow up gently if no reply in 24-48 hours.");
    }

    #[test]
    fn all_regions_are_listed() {
        let text = render_advice(&Region::ALL);
        for region in Region::ALL {
            assert!(text.lines().any(|l| l == region.label()), "missing {region}");
        }
        assert_eq!(text.lines().filter(|l| l.starts_with("  ? ")).count(), 27);
    }
}
