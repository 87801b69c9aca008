// src/scoring.rs
use regex::Regex;

/// Extracts a total score from free-form reasoning text by summing the
/// numerators of every `<integer>/<integer>` fraction it contains
/// (e.g. "Clarity 2/3" contributes 2). Denominators are ignored: the
/// rubric's sub-scores already sum to the total out of 10, so adding
/// numerators reconstructs it.
///
/// No matches is a valid zero-score result, not an error.
pub fn extract_score(reasoning: &str) -> u32 {
    let re = Regex::new(r"(\d+)/(\d+)").unwrap();
    re.captures_iter(reasoning)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .sum()
}

/// Aggregates over a score distribution. All score-valued fields are
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreStats {
    pub avg_score: f64,
    pub score_variance: f64,
    pub score_std_dev: f64,
    pub min_score: u32,
    pub max_score: u32,
}

/// Computes mean, population variance (divisor is n, not n-1), standard
/// deviation and extrema over `scores`. Returns `None` for an empty slice
/// so callers decide how to surface the empty-result case.
pub fn summarize(scores: &[u32]) -> Option<ScoreStats> {
    if scores.is_empty() {
        return None;
    }

    let n = scores.len() as f64;
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = scores
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    Some(ScoreStats {
        avg_score: round2(mean),
        score_variance: round2(variance),
        score_std_dev: round2(variance.sqrt()),
        min_score: *scores.iter().min().unwrap(),
        max_score: *scores.iter().max().unwrap(),
    })
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fractions_scores_zero() {
        assert_eq!(extract_score("The prompt is vague and lacks context."), 0);
        assert_eq!(extract_score(""), 0);
    }

    #[test]
    fn sums_numerators_and_ignores_denominators() {
        let reasoning =
            "Clarity 2/3. Context 1/2. Constraints 2/2. Collaborative framing 1/3.";
        assert_eq!(extract_score(reasoning), 6);

        // Denominators never contribute, even nonsensical ones
        assert_eq!(extract_score("score 3/100 and 4/1"), 7);
    }

    #[test]
    fn fractions_inside_prose() {
        let reasoning = "Criterion 1 earns 3/3 (crystal clear), while Criterion 4 \
                         only gets 1/3 because it asks for the complete answer.";
        assert_eq!(extract_score(reasoning), 4);
    }

    #[test]
    fn summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn summarize_single_element_degenerates() {
        let stats = summarize(&[7]).unwrap();
        assert_eq!(stats.avg_score, 7.0);
        assert_eq!(stats.min_score, 7);
        assert_eq!(stats.max_score, 7);
        assert_eq!(stats.score_variance, 0.0);
        assert_eq!(stats.score_std_dev, 0.0);
    }

    #[test]
    fn summarize_hand_computed_distribution() {
        // mean = 5, population variance = ((9+0+9)/3) = 6, std = sqrt(6) ~= 2.449
        let stats = summarize(&[2, 5, 8]).unwrap();
        assert_eq!(stats.avg_score, 5.0);
        assert_eq!(stats.score_variance, 6.0);
        assert_eq!(stats.score_std_dev, 2.45);
        assert_eq!(stats.min_score, 2);
        assert_eq!(stats.max_score, 8);
    }

    #[test]
    fn summarize_invariants_hold() {
        let scores = [3, 4, 4, 6, 9, 1];
        let stats = summarize(&scores).unwrap();
        assert!(stats.min_score as f64 <= stats.avg_score);
        assert!(stats.avg_score <= stats.max_score as f64);
        // std dev is sqrt(variance) within rounding tolerance
        assert!((stats.score_std_dev - stats.score_variance.sqrt()).abs() < 0.01);
    }
}
