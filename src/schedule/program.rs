use crate::config::ProgramNames;
use crate::layout::markers::Markers;
use crate::schedule::Weekday;
use serde::Serialize;

/// Programs of the broadcast week, one per categorizer variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Program {
    Wide,
    News,
    Friday,
    Saturday,
    Sunday,
}

impl Program {
    pub const ALL: [Program; 5] = [
        Program::Wide,
        Program::News,
        Program::Friday,
        Program::Saturday,
        Program::Sunday,
    ];

    /// Header text naming the program's column(s).
    pub fn name(self, names: &ProgramNames) -> &str {
        match self {
            Program::Wide => &names.wide,
            Program::News => &names.news,
            Program::Friday => &names.friday,
            Program::Saturday => &names.saturday,
            Program::Sunday => &names.sunday,
        }
    }

    /// Weekdays the program airs on, in week order.
    pub fn weekdays(self) -> &'static [Weekday] {
        match self {
            Program::Wide => &[
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
            ],
            Program::News => &[
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
            Program::Friday => &[Weekday::Friday],
            Program::Saturday => &[Weekday::Saturday],
            Program::Sunday => &[Weekday::Sunday],
        }
    }

    /// Row holding the program's header cells. Friday and Saturday shows are
    /// headed on their section anchor row, everything else on row 0.
    pub fn header_row(self, markers: &Markers) -> Option<usize> {
        match self {
            Program::Friday => markers.friday,
            Program::Saturday => markers.saturday,
            _ => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airing_days() {
        assert_eq!(
            Program::Wide.weekdays(),
            &[Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday]
        );
        assert_eq!(Program::News.weekdays().len(), 5);
        assert_eq!(Program::Friday.weekdays(), &[Weekday::Friday]);
        assert_eq!(Program::Saturday.weekdays(), &[Weekday::Saturday]);
        assert_eq!(Program::Sunday.weekdays(), &[Weekday::Sunday]);
    }

    #[test]
    fn header_rows() {
        let markers = Markers {
            friday: Some(20),
            saturday: Some(25),
            sunday: Some(30),
            ..Default::default()
        };
        assert_eq!(Program::Wide.header_row(&markers), Some(0));
        assert_eq!(Program::Sunday.header_row(&markers), Some(0));
        assert_eq!(Program::Friday.header_row(&markers), Some(20));
        assert_eq!(Program::Saturday.header_row(&markers), Some(25));
        assert_eq!(Program::Saturday.name(&ProgramNames::default()), "サタデー");
    }
}
