use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use yield_jobs::SearchConfig;
use yield_jobs::query::{DatePosted, ExperienceLevel, WorkArrangement};

#[derive(Parser, Debug)]
#[command(name = "yield-jobs")]
#[command(about = "Collects job postings from the public job search into a CSV file")]
#[command(version)]
pub struct Args {
    /// Search keywords (e.g. "AI Data")
    pub keywords: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Region name or menu number
    #[arg(short, long)]
    pub region: Option<String>,

    /// Experience levels, comma separated
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub experience: Vec<ExperienceArg>,

    /// Only postings from this period
    #[arg(short, long, value_enum)]
    pub date_posted: Option<DatePostedArg>,

    /// Work arrangement
    #[arg(short, long, value_enum)]
    pub work: Option<WorkArg>,

    /// Maximum number of pages (25 jobs each)
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Seconds to wait between page requests
    #[arg(long)]
    pub delay: Option<u64>,

    /// Output CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name the output file after the keywords
    #[arg(long, conflicts_with = "output")]
    pub name_from_keywords: bool,

    /// Choose keywords and filters from interactive menus
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExperienceArg {
    Internship,
    Entry,
    Associate,
    MidSenior,
    Director,
    Executive,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DatePostedArg {
    Any,
    Month,
    Week,
    Day,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WorkArg {
    Any,
    OnSite,
    Remote,
    Hybrid,
}

impl From<ExperienceArg> for ExperienceLevel {
    fn from(arg: ExperienceArg) -> Self {
        match arg {
            ExperienceArg::Internship => ExperienceLevel::Internship,
            ExperienceArg::Entry => ExperienceLevel::EntryLevel,
            ExperienceArg::Associate => ExperienceLevel::Associate,
            ExperienceArg::MidSenior => ExperienceLevel::MidSeniorLevel,
            ExperienceArg::Director => ExperienceLevel::Director,
            ExperienceArg::Executive => ExperienceLevel::Executive,
        }
    }
}

impl From<DatePostedArg> for DatePosted {
    fn from(arg: DatePostedArg) -> Self {
        match arg {
            DatePostedArg::Any => DatePosted::AnyTime,
            DatePostedArg::Month => DatePosted::PastMonth,
            DatePostedArg::Week => DatePosted::PastWeek,
            DatePostedArg::Day => DatePosted::Past24Hours,
        }
    }
}

impl From<WorkArg> for WorkArrangement {
    fn from(arg: WorkArg) -> Self {
        match arg {
            WorkArg::Any => WorkArrangement::Any,
            WorkArg::OnSite => WorkArrangement::OnSite,
            WorkArg::Remote => WorkArrangement::Remote,
            WorkArg::Hybrid => WorkArrangement::Hybrid,
        }
    }
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, config: &mut SearchConfig) {
        if let Some(keywords) = &self.keywords {
            config.keywords = keywords.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if !self.experience.is_empty() {
            config.experience = self.experience.iter().map(|&e| e.into()).collect();
        }
        if let Some(date_posted) = self.date_posted {
            config.date_posted = date_posted.into();
        }
        if let Some(work) = self.work {
            config.work_arrangement = work.into();
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(delay) = self.delay {
            config.request_delay_secs = delay;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
    }
}
