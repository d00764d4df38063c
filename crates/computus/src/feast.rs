//! Movable feasts at a fixed distance from Pascha.

use std::fmt;

/// A feast defined by its day offset from Pascha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feast {
    /// Pascha itself (offset 0).
    Pascha,
    /// Sunday of the Last Judgement, the last day for meat.
    Meatfare,
    /// Forgiveness Sunday, the last day for dairy.
    Cheesefare,
    /// Western start of Lent.
    AshWednesday,
    /// Wednesday of the fourth week after Pascha.
    MidfeastPentecost,
    /// Apodosis of Pascha, the eve of Ascension.
    LeavetakingPascha,
    /// Fortieth day of Pascha.
    Ascension,
    /// Fiftieth day of Pascha.
    Pentecost,
}

impl Feast {
    /// Every feast, in liturgical order.
    pub const ALL: [Self; 8] = [
        Self::Meatfare,
        Self::Cheesefare,
        Self::AshWednesday,
        Self::Pascha,
        Self::MidfeastPentecost,
        Self::LeavetakingPascha,
        Self::Ascension,
        Self::Pentecost,
    ];

    /// Days from Pascha to the feast (negative for feasts before Pascha).
    pub fn shift_days(self) -> i64 {
        match self {
            Self::Pascha => 0,
            Self::Meatfare => -56,
            Self::Cheesefare => -49,
            Self::AshWednesday => -46,
            Self::MidfeastPentecost => 24,
            Self::LeavetakingPascha => 38,
            Self::Ascension => 39,
            Self::Pentecost => 49,
        }
    }

    /// Display name, with `pascha_name` substituted where the feast names
    /// Pascha (e.g. `"Leavetaking of Easter"`).
    pub fn label(self, pascha_name: &str) -> String {
        match self {
            Self::Pascha => pascha_name.to_string(),
            Self::Meatfare => "Meatfare".to_string(),
            Self::Cheesefare => "Cheesefare".to_string(),
            Self::AshWednesday => "Ash Wednesday".to_string(),
            Self::MidfeastPentecost => "Midfeast of Pentecost".to_string(),
            Self::LeavetakingPascha => format!("Leavetaking of {pascha_name}"),
            Self::Ascension => "Ascension".to_string(),
            Self::Pentecost => "Pentecost".to_string(),
        }
    }
}

impl fmt::Display for Feast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label("Pascha"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let expected: &[(Feast, i64)] = &[
            (Feast::Meatfare, -56),
            (Feast::Cheesefare, -49),
            (Feast::AshWednesday, -46),
            (Feast::Pascha, 0),
            (Feast::MidfeastPentecost, 24),
            (Feast::LeavetakingPascha, 38),
            (Feast::Ascension, 39),
            (Feast::Pentecost, 49),
        ];
        for &(feast, days) in expected {
            assert_eq!(feast.shift_days(), days, "{feast}");
        }
    }

    #[test]
    fn all_is_sorted_by_offset() {
        let offsets: Vec<i64> = Feast::ALL.iter().map(|f| f.shift_days()).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
    }

    #[test]
    fn labels_follow_pascha_name() {
        assert_eq!(Feast::Pascha.label("Easter"), "Easter");
        assert_eq!(
            Feast::LeavetakingPascha.label("Easter"),
            "Leavetaking of Easter"
        );
        assert_eq!(Feast::MidfeastPentecost.to_string(), "Midfeast of Pentecost");
    }
}
