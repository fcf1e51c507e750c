use crate::domain::model::CalculationRecord;

/// Append-only log of the conversions made in this session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CalculationHistory {
    records: Vec<CalculationRecord>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Newest first, at most `max_count` records.
    pub fn recent(&self, max_count: usize) -> Vec<&CalculationRecord> {
        self.records.iter().rev().take(max_count).collect()
    }

    pub fn all_oldest_first(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn recent_view(&self, max_count: usize) -> RecentView<'_> {
        RecentView {
            records: self.recent(max_count),
            total: self.total_count(),
        }
    }
}

/// What the history panel shows: the newest records plus how many exist.
#[derive(Debug, Clone)]
pub struct RecentView<'a> {
    pub records: Vec<&'a CalculationRecord>,
    pub total: usize,
}

impl RecentView<'_> {
    pub fn is_truncated(&self) -> bool {
        self.records.len() < self.total
    }

    pub fn intro(&self) -> String {
        if self.is_truncated() {
            format!(
                "Below are your recent calculations - showing {} / {} calculations.",
                self.records.len(),
                self.total
            )
        } else {
            "Below are all your calculations.".to_string()
        }
    }

    /// One record per line, newest first.
    pub fn body(&self) -> String {
        self.records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Unit;

    fn history_of(n: usize) -> CalculationHistory {
        let mut history = CalculationHistory::new();
        for i in 1..=n {
            history.append(CalculationRecord::new(
                i as f64,
                Unit::Grams,
                0.0,
                Unit::Ounces,
            ));
        }
        history
    }

    fn inputs(records: &[&CalculationRecord]) -> Vec<f64> {
        records.iter().map(|r| r.input_value).collect()
    }

    #[test]
    fn test_recent_returns_everything_when_short() {
        let history = history_of(3);
        assert_eq!(inputs(&history.recent(5)), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_recent_truncates_to_newest() {
        let history = history_of(8);
        assert_eq!(inputs(&history.recent(5)), vec![8.0, 7.0, 6.0, 5.0, 4.0]);
        assert_eq!(history.total_count(), 8);
    }

    #[test]
    fn test_all_oldest_first_keeps_insertion_order() {
        let history = history_of(4);
        let all: Vec<f64> = history
            .all_oldest_first()
            .iter()
            .map(|r| r.input_value)
            .collect();
        assert_eq!(all, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_recent_view_intro() {
        let history = history_of(5);
        let view = history.recent_view(5);
        assert!(!view.is_truncated());
        assert_eq!(view.intro(), "Below are all your calculations.");

        let history = history_of(8);
        let view = history.recent_view(5);
        assert!(view.is_truncated());
        assert_eq!(
            view.intro(),
            "Below are your recent calculations - showing 5 / 8 calculations."
        );
    }

    #[test]
    fn test_recent_view_body_is_newest_first() {
        let history = history_of(2);
        assert_eq!(
            history.recent_view(5).body(),
            "2.0G is 0.0Oz\n1.0G is 0.0Oz"
        );
    }

    #[test]
    fn test_empty_history() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert!(history.recent(5).is_empty());
        assert_eq!(history.recent_view(5).body(), "");
    }
}
