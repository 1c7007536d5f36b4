//! `FeastResolver` — decides the observance of a date and assembles its
//! [`LiturgicalResult`].
//!
//! For a date the candidates are:
//!
//! 1. the movable feast at the date's Easter point;
//! 2. the fixed feast on the date's month and day;
//! 3. a feast displaced from the previous day, renamed
//!    `"<name> (transferred)"`;
//! 4. on a Sunday, the Sunday itself (precedence 5), unless a Principal
//!    Feast or Principal Holy Day is already a candidate.
//!
//! The highest precedence wins; ties keep the order above.  Looking back
//! for a displaced feast evaluates the previous day with the lookahead
//! [disabled](TransferLookahead::Disabled), so it never goes further than
//! one day.

use lit_core::errors::Result;
use lit_readings::ReadingsSelector;
use lit_time::{easter_point, Date};

use crate::colour::Colour;
use crate::feasts::{FeastCandidate, FeastKind, FeastTable};
use crate::result::{LiturgicalResult, TRANSFERRED_SUFFIX};
use crate::season::{Season, SeasonCalculator};
use crate::settings::Settings;

/// Whether candidate collection looks at the previous day for a displaced
/// feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferLookahead {
    /// Include a feast displaced from the previous day.
    Enabled,
    /// Only the date's own observances.
    Disabled,
}

/// Sundays kept in rose.
const ROSE_SUNDAYS: [&str; 2] = ["Advent 3", "Lent 4"];

/// Colour of `feast` observed in the internal `season`.
///
/// In order: the rose Sundays; the feast's own colour; for anything ranked
/// above a Lesser Festival other than a Sunday, red for martyrs and white
/// otherwise; finally the colour of the season.
pub fn liturgical_colour(feast: &FeastCandidate, season: Season) -> Colour {
    if ROSE_SUNDAYS.contains(&feast.name.as_str()) {
        return Colour::Rose;
    }
    if let Some(colour) = feast.colour {
        return colour;
    }
    let sunday = FeastKind::Sunday.precedence();
    if feast.precedence > FeastKind::LesserFestival.precedence() && feast.precedence != sunday {
        return if feast.martyr { Colour::Red } else { Colour::White };
    }
    season.colour()
}

/// Resolves feasts, colours and readings for dates.
#[derive(Debug, Clone)]
pub struct FeastResolver {
    calculator: SeasonCalculator,
    selector: ReadingsSelector,
    feasts: FeastTable,
    settings: Settings,
}

impl Default for FeastResolver {
    fn default() -> Self {
        Self::new(
            SeasonCalculator::new(),
            ReadingsSelector::default(),
            FeastTable::builtin(),
            Settings::default(),
        )
    }
}

impl FeastResolver {
    /// Create a resolver from its collaborators.
    pub fn new(
        calculator: SeasonCalculator,
        selector: ReadingsSelector,
        feasts: FeastTable,
        settings: Settings,
    ) -> Self {
        Self {
            calculator,
            selector,
            feasts,
            settings,
        }
    }

    /// The built-in tables with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Configuration in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Feast table in use.
    pub fn feasts(&self) -> &FeastTable {
        &self.feasts
    }

    /// Readings selector in use.
    pub fn selector(&self) -> &ReadingsSelector {
        &self.selector
    }

    /// Season calculator in use.
    pub fn calculator(&self) -> &SeasonCalculator {
        &self.calculator
    }

    // ── Candidates ────────────────────────────────────────────────────────────

    /// Candidates for `date`, highest precedence first.
    pub fn candidates(&self, date: Date, lookahead: TransferLookahead) -> Vec<FeastCandidate> {
        let mut candidates = Vec::new();

        if let Some(feast) = self.feasts.movable(easter_point(date)) {
            candidates.push(feast.clone());
        }
        if let Some(feast) = self.feasts.fixed(date.month_day()) {
            candidates.push(feast.clone());
        }

        if lookahead == TransferLookahead::Enabled && self.settings.transfer_feasts {
            if let Some(transferred) = self.transferred_into(date) {
                candidates.push(transferred);
            }
        }

        let principal = FeastKind::PrincipalFeast.precedence();
        if date.weekday().is_sunday() && !candidates.iter().any(|c| c.precedence >= principal) {
            let week = self.calculator.week_info(date);
            candidates.push(FeastCandidate::sunday(week.week_name));
        }

        candidates.sort_by(|a, b| b.precedence.cmp(&a.precedence));
        tracing::trace!(
            %date,
            candidates = ?candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "feast candidates"
        );
        candidates
    }

    /// The feast pushed out of `date` by a higher observance, if any.
    ///
    /// Only the date's own observances are considered.  When the Sunday
    /// itself wins, nothing is displaced; otherwise the runner-up is.
    pub fn displaced_feast(&self, date: Date) -> Option<FeastCandidate> {
        let candidates = self.candidates(date, TransferLookahead::Disabled);
        match candidates.first() {
            Some(top) if !top.is_sunday() => candidates.into_iter().nth(1),
            _ => None,
        }
    }

    /// The feast displaced from the day before `date`, renamed for `date`.
    fn transferred_into(&self, date: Date) -> Option<FeastCandidate> {
        let yesterday = date.checked_add_days(-1)?;
        let feast = self.displaced_feast(yesterday)?;
        if feast.is_sunday() || !feast.is_valid() {
            return None;
        }
        tracing::debug!(%date, feast = %feast.name, from = %yesterday, "transferred feast");
        Some(FeastCandidate {
            name: format!("{}{TRANSFERRED_SUFFIX}", feast.name),
            ..feast
        })
    }

    /// The winning observance of `date`; a plain weekday when there is none.
    pub fn select_feast(&self, date: Date) -> FeastCandidate {
        let feast = self
            .candidates(date, TransferLookahead::Enabled)
            .into_iter()
            .next()
            .unwrap_or_else(FeastCandidate::none);
        tracing::debug!(%date, feast = %feast.name, precedence = feast.precedence, "selected feast");
        feast
    }

    // ── Results ───────────────────────────────────────────────────────────────

    /// Compute the liturgical information of `date`.
    ///
    /// Total over [`Date`]: every day from 0001-01-01 to 9999-12-31 has a
    /// result.
    pub fn compute_liturgical_info(&self, date: Date) -> LiturgicalResult {
        let feast = self.select_feast(date);
        self.resolve_with_feast(date, feast)
    }

    /// Parse a `YYYY-MM-DD` date and compute its liturgical information.
    pub fn compute_liturgical_info_str(&self, text: &str) -> Result<LiturgicalResult> {
        let date: Date = text.parse()?;
        Ok(self.compute_liturgical_info(date))
    }

    /// Build the result of `date` around an already chosen `feast`.
    ///
    /// Week, colour and readings are derived exactly as in
    /// [`compute_liturgical_info`](Self::compute_liturgical_info).
    pub fn resolve_with_feast(&self, date: Date, feast: FeastCandidate) -> LiturgicalResult {
        let week = self.calculator.week_info(date);
        let colour = liturgical_colour(&feast, week.season);

        let readings = if feast.precedence >= FeastKind::Sunday.precedence() && !feast.readings.is_empty() {
            feast.readings
        } else {
            self.selector
                .select(date, &week.week_name, week.weekday_reading_key.as_deref())
        };

        let season = week.season.presented();
        LiturgicalResult {
            name: feast.name,
            precedence: feast.precedence,
            kind: feast.kind,
            martyr: feast.martyr,
            season,
            season_url: season.url().to_string(),
            week: week.week_name,
            weekday_reading: week.weekday_reading_key,
            colour,
            colour_code: self.settings.palette.code(colour).to_string(),
            readings,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_time::MonthDay;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn colour_rules() {
        let rose = FeastCandidate::sunday("Lent 4");
        assert_eq!(liturgical_colour(&rose, Season::Lent), Colour::Rose);

        let explicit = FeastCandidate::new("Holy Cross Day", FeastKind::Festival).with_colour(Colour::Red);
        assert_eq!(liturgical_colour(&explicit, Season::Trinity), Colour::Red);

        let martyr = FeastCandidate::new("Andrew", FeastKind::Festival).with_martyr(true);
        assert_eq!(liturgical_colour(&martyr, Season::Advent), Colour::Red);

        let festival = FeastCandidate::new("Michael and All Angels", FeastKind::Festival);
        assert_eq!(liturgical_colour(&festival, Season::Trinity), Colour::White);

        // Sundays and lesser days take the season's colour
        let sunday = FeastCandidate::sunday("Proper 7");
        assert_eq!(liturgical_colour(&sunday, Season::Trinity), Colour::Green);
        let lesser = FeastCandidate::new("Ninian", FeastKind::LesserFestival);
        assert_eq!(liturgical_colour(&lesser, Season::Trinity), Colour::Green);
        assert_eq!(liturgical_colour(&FeastCandidate::none(), Season::Advent), Colour::Purple);
    }

    #[test]
    fn sunday_candidate_yields_to_principal_feasts() {
        let r = FeastResolver::default();
        // Easter Day
        let c = r.candidates(date(2025, 4, 20), TransferLookahead::Disabled);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].name, "Easter Day");
        // An ordinary Sunday with a Lesser Festival
        let c = r.candidates(date(2024, 12, 29), TransferLookahead::Disabled);
        assert_eq!(c[0].name, "Christmas 1");
        assert_eq!(c[1].name, "Thomas Becket");
    }

    #[test]
    fn displaced_feast() {
        let r = FeastResolver::default();
        // Trinity Sunday 2017 displaces Barnabas
        let d = r.displaced_feast(date(2017, 6, 11)).unwrap();
        assert_eq!(d.name, "Barnabas the Apostle");
        // The Sunday beats Thomas Becket: nothing is displaced
        assert!(r.displaced_feast(date(2024, 12, 29)).is_none());
        // A lone feast displaces nothing
        assert!(r.displaced_feast(date(2025, 6, 11)).is_none());
    }

    #[test]
    fn transferred_feast_is_renamed() {
        let r = FeastResolver::default();
        let f = r.select_feast(date(2017, 6, 12));
        assert_eq!(f.name, "Barnabas the Apostle (transferred)");
        assert_eq!(f.precedence, 7);
        assert!(f.martyr);
    }

    #[test]
    fn transfer_can_be_disabled() {
        let r = FeastResolver::with_settings(Settings::new().with_transfer_feasts(false));
        let f = r.select_feast(date(2017, 6, 12));
        assert!(!f.is_valid());
    }

    #[test]
    fn displaced_sunday_is_not_transferred() {
        // A Festival on a Sunday pushes the Sunday to second place
        let mut feasts = FeastTable::new();
        feasts.insert_fixed(
            MonthDay::new_unchecked(9, 14),
            FeastCandidate::new("Holy Cross Day", FeastKind::Festival),
        );
        let r = FeastResolver::new(
            SeasonCalculator::new(),
            ReadingsSelector::default(),
            feasts,
            Settings::default(),
        );
        let displaced = r.displaced_feast(date(2025, 9, 14)).unwrap();
        assert!(displaced.is_sunday());
        assert!(!r.select_feast(date(2025, 9, 15)).is_valid());
    }

    #[test]
    fn first_day_has_no_lookahead() {
        let r = FeastResolver::default();
        let c = r.candidates(Date::MIN, TransferLookahead::Enabled);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].name, "Naming and Circumcision of Jesus");
    }

    #[test]
    fn feast_readings_win_over_the_lectionary() {
        let r = FeastResolver::default();
        let res = r.compute_liturgical_info(date(2025, 3, 5));
        assert_eq!(res.name, "Ash Wednesday");
        assert_eq!(res.readings[0], "Joel 2:1-2,12-17");
        assert_eq!(res.colour, Colour::Purple);
    }

    #[test]
    fn resolve_with_supplied_feast() {
        let r = FeastResolver::default();
        let feast = FeastCandidate::new("Patronal Festival", FeastKind::Festival);
        let res = r.resolve_with_feast(date(2025, 6, 23), feast);
        assert_eq!(res.name, "Patronal Festival");
        assert_eq!(res.colour, Colour::White);
        assert_eq!(res.colour_code, "#FFFFFF");
        assert_eq!(res.week, "Proper 7");
    }

    #[test]
    fn malformed_text_is_an_error() {
        let r = FeastResolver::default();
        assert!(r.compute_liturgical_info_str("2025-13-01").is_err());
        assert!(r.compute_liturgical_info_str("not a date").is_err());
        assert!(r.compute_liturgical_info_str("2025-06-22").is_ok());
    }
}
