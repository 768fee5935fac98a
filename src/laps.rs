//! Recorded laps and the rows derived from them for display.
//!
//! Each lap stores the cumulative elapsed time at the moment it was taken. The split since
//! the previous lap is computed when rows are built and is never stored.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LapStyle {
    Plain,
    Fastest,
    Slowest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LapRow {
    /// 1 is the oldest lap
    pub number: usize,
    pub value_ms: u64,
    pub split_ms: u64,
    pub style: LapStyle,
}

#[derive(Clone, Debug, Default)]
pub struct Laps {
    values: Vec<u64>,
}

impl Laps {
    pub const MAX_LAPS: usize = 999;

    pub fn new() -> Laps {
        Default::default()
    }

    /// Returns false if the lap list is full and the value was dropped.
    pub fn push(&mut self, value_ms: u64) -> bool {
        if self.values.len() >= Self::MAX_LAPS {
            return false;
        }
        self.values.push(value_ms);
        true
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn last(&self) -> Option<u64> {
        self.values.last().copied()
    }

    /// Rows newest first, styled against the extremes of all recorded values.
    pub fn rows(&self) -> Vec<LapRow> {
        let (min, max) = match extremes(&self.values) {
            Some(v) => v,
            None => return Vec::new(),
        };

        self.values
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, &value_ms)| {
                let previous = if idx == 0 { 0 } else { self.values[idx - 1] };
                LapRow {
                    number: idx + 1,
                    value_ms,
                    split_ms: value_ms.saturating_sub(previous),
                    style: style_for(value_ms, min, max),
                }
            })
            .collect()
    }
}

fn extremes(values: &[u64]) -> Option<(u64, u64)> {
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;
    Some((min, max))
}

fn style_for(value: u64, min: u64, max: u64) -> LapStyle {
    // Nothing stands out when every lap is the same
    if min == max {
        LapStyle::Plain
    } else if value == max {
        LapStyle::Slowest
    } else if value == min {
        LapStyle::Fastest
    } else {
        LapStyle::Plain
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn laps_from(values: &[u64]) -> Laps {
        let mut laps = Laps::new();
        for v in values {
            assert!(laps.push(*v));
        }
        laps
    }

    #[test]
    fn test_empty() {
        assert!(Laps::new().rows().is_empty());
    }

    #[test]
    fn test_rows_newest_first() {
        let rows = laps_from(&[500, 1200, 900]).rows();

        let numbers: Vec<usize> = rows.iter().map(|r| r.number).collect();
        let values: Vec<u64> = rows.iter().map(|r| r.value_ms).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(values, vec![900, 1200, 500]);
    }

    #[test]
    fn test_fastest_and_slowest() {
        let rows = laps_from(&[500, 1200, 900]).rows();

        let style_of = |value: u64| rows.iter().find(|r| r.value_ms == value).unwrap().style;
        assert_eq!(style_of(1200), LapStyle::Slowest);
        assert_eq!(style_of(500), LapStyle::Fastest);
        assert_eq!(style_of(900), LapStyle::Plain);
    }

    #[test]
    fn test_single_lap_unstyled() {
        let rows = laps_from(&[700]).rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].style, LapStyle::Plain);
    }

    #[test]
    fn test_all_equal_unstyled() {
        let rows = laps_from(&[300, 300, 300]).rows();
        assert!(rows.iter().all(|r| r.style == LapStyle::Plain));
    }

    #[test]
    fn test_ties_style_every_match() {
        let rows = laps_from(&[400, 900, 400, 900, 600]).rows();
        let styles: Vec<LapStyle> = rows.iter().map(|r| r.style).collect();
        assert_eq!(
            styles,
            vec![
                LapStyle::Plain,
                LapStyle::Slowest,
                LapStyle::Fastest,
                LapStyle::Slowest,
                LapStyle::Fastest,
            ]
        );
    }

    #[test]
    fn test_splits() {
        let rows = laps_from(&[1000, 2500, 3100]).rows();
        let splits: Vec<u64> = rows.iter().map(|r| r.split_ms).collect();
        assert_eq!(splits, vec![600, 1500, 1000]);
    }

    #[test]
    fn test_cap() {
        let mut laps = Laps::new();
        for i in 0..Laps::MAX_LAPS {
            assert!(laps.push(i as u64));
        }
        assert!(!laps.push(0));
        assert_eq!(laps.len(), Laps::MAX_LAPS);
    }

    #[test]
    fn test_clear() {
        let mut laps = laps_from(&[1, 2]);
        laps.clear();
        assert!(laps.is_empty());
        assert_eq!(laps.last(), None);
    }
}
