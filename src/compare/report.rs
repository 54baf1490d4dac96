//! Human-readable rendering of comparison failures

use crate::error::CompareError;

/// Build a unified diff between two canonical renderings.
pub fn diff_lines(expected: &str, actual: &str) -> Vec<String> {
    let lines_e: Vec<&str> = expected.lines().collect();
    let lines_a: Vec<&str> = actual.lines().collect();

    let mut diff = Vec::new();
    diff.push("--- expected".to_string());
    diff.push("+++ actual".to_string());

    let max_len = lines_e.len().max(lines_a.len());
    let mut i = 0;
    while i < max_len {
        let le = lines_e.get(i).copied().unwrap_or("");
        let la = lines_a.get(i).copied().unwrap_or("");
        if le != la {
            // Find the extent of this hunk
            let start = i;
            while i < max_len {
                let le2 = lines_e.get(i).copied().unwrap_or("");
                let la2 = lines_a.get(i).copied().unwrap_or("");
                if le2 == la2 {
                    break;
                }
                i += 1;
            }
            // Show context
            let ctx_start = start.saturating_sub(3);
            let ctx_end = (i + 3).min(max_len);
            diff.push(format!(
                "@@ -{},{} +{},{} @@",
                ctx_start + 1,
                ctx_end - ctx_start,
                ctx_start + 1,
                ctx_end - ctx_start
            ));
            for j in ctx_start..ctx_end {
                let le2 = lines_e.get(j).copied();
                let la2 = lines_a.get(j).copied();
                if j >= start && j < i {
                    if let Some(le2) = le2 {
                        diff.push(format!("-{}", le2));
                    }
                    if let Some(la2) = la2 {
                        diff.push(format!("+{}", la2));
                    }
                } else {
                    let line = le2.or(la2).unwrap_or("");
                    diff.push(format!(" {}", line));
                }
            }
        }
        i += 1;
    }

    diff
}

/// Print a comparison failure, with a diff of the canonical forms where the
/// failure carries them.
pub fn print_failure(err: &CompareError) {
    println!("=== CSDL Comparison Report ===");
    println!();
    println!("{}", err);

    let (expected, actual) = match err {
        CompareError::ContainersDiffer {
            expected_csdl,
            actual_csdl,
        }
        | CompareError::SchemasDiffer {
            expected_csdl,
            actual_csdl,
            ..
        } => (expected_csdl, actual_csdl),
        _ => return,
    };

    println!();
    let limit = 200;
    let lines = diff_lines(expected, actual);
    for line in lines.iter().take(limit) {
        println!("{}", line);
    }
    if lines.len() > limit {
        println!("  ... ({} more lines)", lines.len() - limit);
    }
}
