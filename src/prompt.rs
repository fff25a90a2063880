use std::io::{self, BufRead, Write};
use yield_jobs::SearchConfig;
use yield_jobs::query::{
    DatePosted, ExperienceLevel, Region, WorkArrangement, parse_experience_selection,
};

/// Ask for keywords and filters on the terminal, filling in `config`.
///
/// Empty answers keep the configured keywords; unrecognized filter choices
/// mean "no filter" and an unknown region falls back to the default.
pub fn ask(config: &mut SearchConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let keywords = read_line(&mut input, &format!("Keywords [{}]: ", config.keywords))?;
    if !keywords.is_empty() {
        config.keywords = keywords;
    }

    print_menu("Region", Region::ALL.iter().map(|r| r.label()));
    let region = read_line(&mut input, "Select region: ")?;
    config.region = Region::resolve(&region).label().to_string();

    print_menu("Experience level", ExperienceLevel::ALL.iter().map(|e| e.label()));
    let experience = read_line(&mut input, "Select levels (e.g. 2,4; empty for any): ")?;
    config.experience = parse_experience_selection(&experience);

    print_menu("Date posted", DatePosted::ALL.iter().map(|d| d.label()));
    config.date_posted = DatePosted::from_menu(&read_line(&mut input, "Select: ")?);

    print_menu("Work arrangement", WorkArrangement::ALL.iter().map(|w| w.label()));
    config.work_arrangement = WorkArrangement::from_menu(&read_line(&mut input, "Select: ")?);

    Ok(())
}

fn print_menu<'a>(title: &str, labels: impl Iterator<Item = &'a str>) {
    println!("\n{}:", title);
    for (i, label) in labels.enumerate() {
        println!("  {}. {}", i + 1, label);
    }
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
