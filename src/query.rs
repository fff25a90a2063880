use crate::config::SearchConfig;
use serde::{Deserialize, Serialize};

/// Query key for the experience filter
pub const EXPERIENCE_KEY: &str = "f_E";
/// Query key for the recency filter
pub const DATE_POSTED_KEY: &str = "f_TPR";
/// Query key for the work arrangement filter
pub const WORK_ARRANGEMENT_KEY: &str = "f_WT";
/// Query key for the pagination offset
pub const OFFSET_KEY: &str = "start";

/// Experience levels understood by the search backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    MidSeniorLevel,
    Director,
    Executive,
}

impl ExperienceLevel {
    /// All levels in menu order
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Internship,
        ExperienceLevel::EntryLevel,
        ExperienceLevel::Associate,
        ExperienceLevel::MidSeniorLevel,
        ExperienceLevel::Director,
        ExperienceLevel::Executive,
    ];

    /// Backend code for this level
    pub fn code(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "1",
            ExperienceLevel::EntryLevel => "2",
            ExperienceLevel::Associate => "3",
            ExperienceLevel::MidSeniorLevel => "4",
            ExperienceLevel::Director => "5",
            ExperienceLevel::Executive => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::EntryLevel => "Entry level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::MidSeniorLevel => "Mid-Senior level",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
        }
    }

    /// Menu numbers coincide with backend codes
    pub fn from_menu(choice: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == choice.trim())
    }
}

/// Recency filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePosted {
    #[default]
    AnyTime,
    PastMonth,
    PastWeek,
    #[serde(rename = "past_24_hours")]
    Past24Hours,
}

impl DatePosted {
    pub const ALL: [DatePosted; 4] = [
        DatePosted::AnyTime,
        DatePosted::PastMonth,
        DatePosted::PastWeek,
        DatePosted::Past24Hours,
    ];

    /// Backend token, `None` when no filter applies
    pub fn code(&self) -> Option<&'static str> {
        match self {
            DatePosted::AnyTime => None,
            DatePosted::PastMonth => Some("r2592000"),
            DatePosted::PastWeek => Some("r604800"),
            DatePosted::Past24Hours => Some("r86400"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePosted::AnyTime => "Any time",
            DatePosted::PastMonth => "Past month",
            DatePosted::PastWeek => "Past week",
            DatePosted::Past24Hours => "Past 24 hours",
        }
    }

    /// Resolve a 1-based menu choice; anything unrecognized means no filter
    pub fn from_menu(choice: &str) -> Self {
        menu_index(choice, Self::ALL.len())
            .map(|i| Self::ALL[i])
            .unwrap_or_default()
    }
}

/// Work arrangement filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    #[default]
    Any,
    OnSite,
    Remote,
    Hybrid,
}

impl WorkArrangement {
    pub const ALL: [WorkArrangement; 4] = [
        WorkArrangement::Any,
        WorkArrangement::OnSite,
        WorkArrangement::Remote,
        WorkArrangement::Hybrid,
    ];

    /// Backend code, `None` when no filter applies
    pub fn code(&self) -> Option<&'static str> {
        match self {
            WorkArrangement::Any => None,
            WorkArrangement::OnSite => Some("1"),
            WorkArrangement::Remote => Some("2"),
            WorkArrangement::Hybrid => Some("3"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkArrangement::Any => "Any",
            WorkArrangement::OnSite => "On-site",
            WorkArrangement::Remote => "Remote",
            WorkArrangement::Hybrid => "Hybrid",
        }
    }

    /// Resolve a 1-based menu choice; anything unrecognized means no filter
    pub fn from_menu(choice: &str) -> Self {
        menu_index(choice, Self::ALL.len())
            .map(|i| Self::ALL[i])
            .unwrap_or_default()
    }
}

/// Closed set of searchable regions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    EuropeanUnion,
    UnitedStates,
    UnitedKingdom,
    Germany,
    France,
    Netherlands,
    Canada,
    India,
    Australia,
    Worldwide,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::EuropeanUnion,
        Region::UnitedStates,
        Region::UnitedKingdom,
        Region::Germany,
        Region::France,
        Region::Netherlands,
        Region::Canada,
        Region::India,
        Region::Australia,
        Region::Worldwide,
    ];

    /// Geographic identifier used by the backend
    pub fn geo_id(&self) -> &'static str {
        match self {
            Region::EuropeanUnion => "91000000",
            Region::UnitedStates => "103644278",
            Region::UnitedKingdom => "101165590",
            Region::Germany => "101282230",
            Region::France => "105015875",
            Region::Netherlands => "102890719",
            Region::Canada => "101174742",
            Region::India => "102713980",
            Region::Australia => "101452733",
            Region::Worldwide => "92000000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::EuropeanUnion => "European Union",
            Region::UnitedStates => "United States",
            Region::UnitedKingdom => "United Kingdom",
            Region::Germany => "Germany",
            Region::France => "France",
            Region::Netherlands => "Netherlands",
            Region::Canada => "Canada",
            Region::India => "India",
            Region::Australia => "Australia",
            Region::Worldwide => "Worldwide",
        }
    }

    /// Resolve a region from a 1-based menu number or a name.
    ///
    /// Names match case-insensitively against the label or the snake_case
    /// form (`"united states"`, `"united_states"`). Unrecognized input falls
    /// back to the default region and logs a warning.
    pub fn resolve(input: &str) -> Self {
        if let Some(i) = menu_index(input, Self::ALL.len()) {
            return Self::ALL[i];
        }

        let wanted = normalize_name(input);
        if let Some(region) = Self::ALL
            .into_iter()
            .find(|r| normalize_name(r.label()) == wanted)
        {
            return region;
        }

        let fallback = Self::default();
        ::log::warn!(
            "Unknown region {:?}, falling back to {}",
            input,
            fallback.label()
        );
        fallback
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', '-'], " ")
}

/// Parse a 1-based menu choice into a zero-based index
fn menu_index(choice: &str, len: usize) -> Option<usize> {
    match choice.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Parse a comma-separated experience selection such as `"2,4"`.
///
/// Invalid tokens are dropped with a warning and duplicates keep their first
/// position, so an empty or all-invalid selection yields an empty list.
pub fn parse_experience_selection(input: &str) -> Vec<ExperienceLevel> {
    let mut levels = Vec::new();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match ExperienceLevel::from_menu(token) {
            Some(level) if !levels.contains(&level) => levels.push(level),
            Some(_) => {}
            None => ::log::warn!("Ignoring unknown experience level {:?}", token),
        }
    }
    levels
}

/// Immutable parameter set for one run; only the offset varies per page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pairs: Vec<(&'static str, String)>,
}

impl SearchParameters {
    /// Look up the value sent for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Full query for one page, with the offset appended
    pub fn query_pairs(&self, offset: usize) -> Vec<(&'static str, String)> {
        let mut pairs = self.pairs.clone();
        pairs.push((OFFSET_KEY, offset.to_string()));
        pairs
    }
}

/// Maps filter selections to backend codes
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    keywords: String,
    region: Region,
    experience: Vec<ExperienceLevel>,
    date_posted: DatePosted,
    work_arrangement: WorkArrangement,
}

impl QueryBuilder {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            ..Self::default()
        }
    }

    /// Seed a builder from a loaded configuration
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            keywords: config.keywords.clone(),
            region: Region::resolve(&config.region),
            experience: config.experience.clone(),
            date_posted: config.date_posted,
            work_arrangement: config.work_arrangement,
        }
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn experience(mut self, levels: &[ExperienceLevel]) -> Self {
        self.experience = levels.to_vec();
        self
    }

    /// Apply a comma-separated experience menu selection
    pub fn experience_selection(self, input: &str) -> Self {
        let levels = parse_experience_selection(input);
        self.experience(&levels)
    }

    pub fn date_posted(mut self, date_posted: DatePosted) -> Self {
        self.date_posted = date_posted;
        self
    }

    pub fn work_arrangement(mut self, work_arrangement: WorkArrangement) -> Self {
        self.work_arrangement = work_arrangement;
        self
    }

    /// Build the parameter set; unset filters are omitted entirely
    pub fn build(&self) -> SearchParameters {
        let mut pairs = vec![
            ("keywords", self.keywords.clone()),
            ("location", self.region.label().to_string()),
            ("geoId", self.region.geo_id().to_string()),
        ];

        let experience = self
            .experience
            .iter()
            .map(|level| level.code())
            .collect::<Vec<_>>()
            .join(",");
        if !experience.is_empty() {
            pairs.push((EXPERIENCE_KEY, experience));
        }
        if let Some(code) = self.date_posted.code() {
            pairs.push((DATE_POSTED_KEY, code.to_string()));
        }
        if let Some(code) = self.work_arrangement.code() {
            pairs.push((WORK_ARRANGEMENT_KEY, code.to_string()));
        }

        ::log::debug!("Search parameters: {:?}", pairs);
        SearchParameters { pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_selection_joins_codes() {
        let params = QueryBuilder::new("rust").experience_selection("2,4").build();
        assert_eq!(params.get(EXPERIENCE_KEY), Some("2,4"));
    }

    #[test]
    fn test_empty_experience_selection_omits_key() {
        let params = QueryBuilder::new("rust").experience_selection("").build();
        assert_eq!(params.get(EXPERIENCE_KEY), None);
        assert!(params.query_pairs(0).iter().all(|(k, _)| *k != EXPERIENCE_KEY));
    }

    #[test]
    fn test_invalid_experience_tokens_are_dropped() {
        assert_eq!(
            parse_experience_selection("9, 3,x,3"),
            vec![ExperienceLevel::Associate]
        );
        assert!(parse_experience_selection("0,7,abc").is_empty());

        let params = QueryBuilder::new("rust").experience_selection("7,8").build();
        assert_eq!(params.get(EXPERIENCE_KEY), None);
    }

    #[test]
    fn test_unset_filters_are_omitted() {
        let params = QueryBuilder::new("data").build();
        let pairs = params.query_pairs(50);
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["keywords", "location", "geoId", OFFSET_KEY]);
        assert_eq!(pairs.last().unwrap().1, "50");
    }

    #[test]
    fn test_single_valued_filters() {
        let params = QueryBuilder::new("data")
            .date_posted(DatePosted::PastWeek)
            .work_arrangement(WorkArrangement::Remote)
            .build();
        assert_eq!(params.get(DATE_POSTED_KEY), Some("r604800"));
        assert_eq!(params.get(WORK_ARRANGEMENT_KEY), Some("2"));
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(DatePosted::from_menu("4"), DatePosted::Past24Hours);
        assert_eq!(DatePosted::from_menu("1"), DatePosted::AnyTime);
        assert_eq!(DatePosted::from_menu(""), DatePosted::AnyTime);
        assert_eq!(DatePosted::from_menu("9"), DatePosted::AnyTime);

        assert_eq!(WorkArrangement::from_menu("2"), WorkArrangement::OnSite);
        assert_eq!(WorkArrangement::from_menu("nope"), WorkArrangement::Any);
    }

    #[test]
    fn test_region_resolution() {
        assert_eq!(Region::resolve("2"), Region::UnitedStates);
        assert_eq!(Region::resolve("united_states"), Region::UnitedStates);
        assert_eq!(Region::resolve("European Union"), Region::EuropeanUnion);
        assert_eq!(Region::resolve("Atlantis"), Region::EuropeanUnion);
        assert_eq!(Region::resolve("0"), Region::EuropeanUnion);

        let params = QueryBuilder::new("x").region(Region::Germany).build();
        assert_eq!(params.get("geoId"), Some("101282230"));
        assert_eq!(params.get("location"), Some("Germany"));
    }
}
