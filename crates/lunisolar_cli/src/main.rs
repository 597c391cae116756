use std::error::Error;

use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lunisolar_base::{GanZhi, Language, Polarity};
use lunisolar_bazi::{
    BaziError, ChartAnalysis, DEFAULT_LUCK_PILLARS, DayMasterRooting, DayMasterScore,
    FourPillars, Gender, LuckDirection, LuckPillar, LuckStart, Pillar, analyze_chart,
    analyze_rooting, detect_branch_interactions, detect_trio_combinations,
    generate_luck_pillars, luck_direction, luck_start_from_terms, score_day_master,
    score_day_master_with,
};
use lunisolar_calendar::{
    CalendarConfig, LunisolarDate, LunisolarView, convert_range, convert_with_oracle,
};
use lunisolar_search::{AnalyticOracle, SearchConfig, compute_window};
use lunisolar_time::{LocalDateTime, UnixTime, parse_utc_offset};

#[derive(Parser)]
#[command(name = "lunisolar", about = "Lunisolar calendar and Four Pillars CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Label language: zh, en or vi
    #[arg(long, global = true, env = "LUNISOLAR_LANG", default_value = "zh")]
    lang: Language,

    /// UTC offset: seconds, or +hh:mm / -hhmm
    #[arg(
        long,
        global = true,
        env = "LUNISOLAR_OFFSET",
        default_value = "28800",
        allow_hyphen_values = true,
        value_parser = parse_offset
    )]
    offset: i64,

    /// Tracing filter, overrides RUST_LOG (e.g. debug, lunisolar_calendar=trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one local date/time to the lunisolar calendar
    Convert {
        /// Local date/time (YYYY-MM-DD[Thh:mm[:ss]])
        #[arg(long)]
        date: LocalDateTime,
    },
    /// Convert every day of a date range (each taken at local noon)
    Range {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: LocalDateTime,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: LocalDateTime,
    },
    /// List the solar terms and new moons of a year
    Terms {
        /// Gregorian year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
    },
    /// Analyse a Four Pillars chart
    #[command(group(ArgGroup::new("chart").required(true).args(["pillars", "cycles"])))]
    Bazi {
        /// Pillars in year, month, day, hour order (e.g. "乙巳,戊寅,戊戌,戊午")
        #[arg(long)]
        pillars: Option<FourPillars>,
        /// Sexagenary cycle numbers 1-60 (e.g. 42,15,35,55)
        #[arg(long, value_delimiter = ',')]
        cycles: Option<Vec<u8>>,
        /// Dynamic pillar to check for recurrence (e.g. 乙巳 or 42)
        #[arg(long)]
        dynamic: Option<Pillar>,
    },
    /// Ten-year luck pillars of a chart
    #[command(group(ArgGroup::new("chart").args(["pillars", "cycles"])))]
    Luck {
        /// Pillars in year, month, day, hour order
        #[arg(long)]
        pillars: Option<FourPillars>,
        /// Sexagenary cycle numbers 1-60
        #[arg(long, value_delimiter = ',')]
        cycles: Option<Vec<u8>>,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Local birth date/time; gives start ages and, alone, the chart itself
        #[arg(long)]
        birth: Option<LocalDateTime>,
        /// Number of luck pillars
        #[arg(long, default_value_t = DEFAULT_LUCK_PILLARS)]
        count: usize,
    },
    /// Day Master strength and rooting of a chart
    #[command(group(ArgGroup::new("chart").required(true).args(["pillars", "cycles"])))]
    Strength {
        /// Pillars in year, month, day, hour order
        #[arg(long)]
        pillars: Option<FourPillars>,
        /// Sexagenary cycle numbers 1-60
        #[arg(long, value_delimiter = ',')]
        cycles: Option<Vec<u8>>,
    },
    /// Year, month, day and hour pillars of a local date/time
    Pillars {
        /// Local date/time (YYYY-MM-DD[Thh:mm[:ss]])
        #[arg(long)]
        date: LocalDateTime,
    },
}

fn parse_offset(s: &str) -> Result<i64, String> {
    parse_utc_offset(s).map_err(|e| e.to_string())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = CalendarConfig::default();
    let (lang, offset) = (cli.lang, cli.offset);

    match &cli.command {
        Commands::Convert { date } => {
            let instant = date.to_unix_time(offset);
            let result = convert_with_oracle(instant, offset, &AnalyticOracle, &config)?;
            if cli.json {
                print_json(&result.render(lang))?;
            } else {
                print_conversion(&result, lang);
            }
        }

        Commands::Range { from, to } => {
            let days = convert_range(from.date, to.date, offset, &AnalyticOracle, &config)?;
            if cli.json {
                let views: Vec<LunisolarView> = days.iter().map(|d| d.render(lang)).collect();
                print_json(&views)?;
            } else {
                for day in &days {
                    println!(
                        "{}  {}  {}",
                        day.solar.date,
                        day.date_label(lang),
                        day.pillars.label(lang)
                    );
                }
            }
        }

        Commands::Terms { year } => {
            let events = year_events(*year, offset, lang)?;
            if cli.json {
                print_json(&events)?;
            } else {
                println!("Solar terms {year} (UTC{})", format_offset(offset));
                for t in &events.solar_terms {
                    let mark = if t.principal { "*" } else { " " };
                    println!("  {mark} {:<24} {}", t.name, t.local);
                }
                println!("New moons {year}");
                for m in &events.new_moons {
                    println!("    {}", m.local);
                }
            }
        }

        Commands::Bazi {
            pillars,
            cycles,
            dynamic,
        } => {
            let chart = match (pillars, cycles) {
                (Some(chart), _) => *chart,
                (None, Some(cycles)) => chart_from_cycles(cycles)?,
                (None, None) => return Err("one of --pillars or --cycles is required".into()),
            };
            let analysis = analyze_chart(&chart, *dynamic);
            if cli.json {
                print_json(&analysis)?;
            } else {
                print_analysis(&analysis, lang);
            }
        }

        Commands::Luck {
            pillars,
            cycles,
            gender,
            birth,
            count,
        } => {
            let birth = birth.as_ref().map(|b| b.to_unix_time(offset));
            let chart = match (chart_source(pillars.as_ref(), cycles.as_deref())?, birth) {
                (Some(chart), _) => chart,
                (None, Some(instant)) => chart_at(instant, offset, &config)?,
                (None, None) => {
                    return Err("one of --pillars, --cycles or --birth is required".into());
                }
            };
            let report = luck_report(&chart, *gender, birth, offset, *count)?;
            if cli.json {
                print_json(&report)?;
            } else {
                print_luck(&report, lang);
            }
        }

        Commands::Strength { pillars, cycles } => {
            let chart = chart_source(pillars.as_ref(), cycles.as_deref())?
                .ok_or("one of --pillars or --cycles is required")?;
            let report = strength_report(&chart);
            if cli.json {
                print_json(&report)?;
            } else {
                print_strength(&report, lang);
            }
        }

        Commands::Pillars { date } => {
            let instant = date.to_unix_time(offset);
            let result = convert_with_oracle(instant, offset, &AnalyticOracle, &config)?;
            let view = result.render(lang);
            if cli.json {
                print_json(&[view.year, view.month, view.day, view.hour])?;
            } else {
                println!("{}", result.pillars.label(lang));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `+08:00` style rendering of an offset in seconds.
fn format_offset(seconds: i64) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

fn chart_from_cycles(cycles: &[u8]) -> Result<FourPillars, BaziError> {
    let pillars = cycles
        .iter()
        .map(|&c| GanZhi::from_cycle(c).map(Pillar::from))
        .collect::<Result<Vec<_>, _>>()?;
    match pillars.as_slice() {
        &[year, month, day, hour] => Ok(FourPillars::new(year, month, day, hour)),
        other => Err(BaziError::PillarCount(other.len())),
    }
}

fn chart_source(
    pillars: Option<&FourPillars>,
    cycles: Option<&[u8]>,
) -> Result<Option<FourPillars>, BaziError> {
    match (pillars, cycles) {
        (Some(chart), _) => Ok(Some(*chart)),
        (None, Some(cycles)) => chart_from_cycles(cycles).map(Some),
        (None, None) => Ok(None),
    }
}

/// The four pillars of a birth instant.
fn chart_at(
    instant: UnixTime,
    offset: i64,
    config: &CalendarConfig,
) -> Result<FourPillars, Box<dyn Error>> {
    let result = convert_with_oracle(instant, offset, &AnalyticOracle, config)?;
    Ok(FourPillars::from_ganzhi(result.pillars.as_array()))
}

#[derive(Serialize)]
struct LuckReport {
    chart: FourPillars,
    gender: Gender,
    direction: LuckDirection,
    start: LuckStart,
    pillars: Vec<LuckPillar>,
}

fn luck_report(
    chart: &FourPillars,
    gender: Gender,
    birth: Option<UnixTime>,
    offset: i64,
    count: usize,
) -> Result<LuckReport, Box<dyn Error>> {
    let start = match birth {
        Some(instant) => {
            let year = instant.local_date(offset).year;
            let window =
                compute_window(&AnalyticOracle, year - 1, year + 1, &SearchConfig::default())?;
            luck_start_from_terms(chart, gender, &window.solar_terms, instant, offset)
        }
        None => LuckStart::Unknown,
    };
    let direction = luck_direction(chart, gender);
    debug!(?direction, ?start, count, "luck pillars");
    Ok(LuckReport {
        chart: *chart,
        gender,
        direction,
        start,
        pillars: generate_luck_pillars(chart, gender, count, start),
    })
}

#[derive(Serialize)]
struct StrengthReport {
    chart: FourPillars,
    /// Season, hidden stems and visible stems only.
    natal: DayMasterScore,
    /// With rooting, three-branch frames and Month clashes.
    adjusted: DayMasterScore,
    rooting: DayMasterRooting,
}

fn strength_report(chart: &FourPillars) -> StrengthReport {
    let rooting = analyze_rooting(chart);
    let adjusted = score_day_master_with(
        chart,
        &rooting,
        &detect_trio_combinations(chart),
        &detect_branch_interactions(chart),
    );
    StrengthReport {
        chart: *chart,
        natal: score_day_master(chart),
        adjusted,
        rooting,
    }
}

#[derive(Serialize)]
struct TermRow {
    index: u8,
    name: &'static str,
    principal: bool,
    utc: String,
    local: String,
}

#[derive(Serialize)]
struct MoonRow {
    utc: String,
    local: String,
}

#[derive(Serialize)]
struct YearEvents {
    year: i32,
    utc_offset_seconds: i64,
    solar_terms: Vec<TermRow>,
    new_moons: Vec<MoonRow>,
}

fn year_events(year: i32, offset: i64, lang: Language) -> Result<YearEvents, Box<dyn Error>> {
    let window = compute_window(&AnalyticOracle, year, year, &SearchConfig::default())?;
    debug!(
        year,
        moons = window.new_moons.len(),
        terms = window.solar_terms.len(),
        "year events"
    );
    let solar_terms = window
        .terms_in_year(year)
        .map(|e| TermRow {
            index: e.term.index(),
            name: e.term.label(lang),
            principal: e.term.is_principal(),
            utc: e.time.to_string(),
            local: e.time.decompose(offset).to_string(),
        })
        .collect();
    let new_moons = window
        .new_moons_in_year(year)
        .map(|t| MoonRow {
            utc: t.to_string(),
            local: t.decompose(offset).to_string(),
        })
        .collect();
    Ok(YearEvents {
        year,
        utc_offset_seconds: offset,
        solar_terms,
        new_moons,
    })
}

fn print_conversion(result: &LunisolarDate, lang: Language) {
    let view = result.render(lang);
    println!(
        "Solar:  {} (UTC{})",
        view.solar,
        format_offset(view.utc_offset_seconds)
    );
    println!(
        "Lunar:  {}  [{}-{}-{}{}]",
        view.date_label,
        view.lunar_year,
        view.lunar_month,
        view.lunar_day,
        if view.is_leap_month { " leap" } else { "" }
    );
    for (name, p) in [
        ("Year", &view.year),
        ("Month", &view.month),
        ("Day", &view.day),
        ("Hour", &view.hour),
    ] {
        println!("  {name:<6} {} (cycle {})", p.label, p.cycle);
    }
    println!(
        "Day:    {} / {} ({})",
        view.construction_star, view.path_spirit, view.path
    );
}

fn polarity_label(p: Polarity, lang: Language) -> &'static str {
    match lang {
        Language::Chinese => p.chinese(),
        _ => p.name(),
    }
}

fn print_score(name: &str, s: &DayMasterScore, lang: Language) {
    println!(
        "{name:<9} {:.2}  {}  (season {:+})",
        s.score,
        s.strength.label(lang),
        s.seasonal
    );
}

fn print_rooting(r: &DayMasterRooting, lang: Language) {
    println!(
        "Rooting:  {:.2}  {}  main {} minor {}{}{}",
        r.total,
        r.class.label(lang),
        r.main_roots,
        r.minor_roots,
        if r.jian_lu { "  建禄" } else { "" },
        if r.yang_ren { "  羊刃" } else { "" }
    );
}

fn print_strength(r: &StrengthReport, lang: Language) {
    println!("Chart:    {}", r.chart.label(lang));
    print_score("Natal:", &r.natal, lang);
    print_score("Adjusted:", &r.adjusted, lang);
    print_rooting(&r.rooting, lang);
}

fn print_luck(r: &LuckReport, lang: Language) {
    println!("Chart:     {}", r.chart.label(lang));
    println!(
        "Direction: {} ({})",
        r.direction.label(lang),
        r.gender.label(lang)
    );
    for p in &r.pillars {
        let age = p.start_age.map_or_else(|| "-".to_string(), |a| a.to_string());
        let year = p.start_year.map_or_else(|| "-".to_string(), |y| y.to_string());
        println!(
            "  {:>2}  {:<8} {:<18} {:<16} {:<10} {:>6} {}",
            p.index + 1,
            p.pillar.label(lang),
            p.ten_god.label(lang),
            p.longevity.label(lang),
            p.na_yin.map_or("-", |n| n.label(lang)),
            age,
            year
        );
    }
}

fn print_analysis(a: &ChartAnalysis, lang: Language) {
    println!("Chart:  {}", a.chart.label(lang));
    println!(
        "Day Master: {} ({} {})",
        a.day_master.label(lang),
        polarity_label(a.day_master_polarity, lang),
        a.day_master_element.label(lang)
    );

    println!("Pillars:");
    for p in &a.pillars {
        println!(
            "  {:<6} {:<8} {:<18} {:<16} {}",
            p.position.label(lang),
            p.pillar.label(lang),
            p.ten_god_label(lang),
            p.longevity.label(lang),
            p.na_yin.map_or("-", |n| n.label(lang))
        );
    }

    let tally = &a.element_tally;
    let counts: Vec<String> = lunisolar_base::ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{} {}", e.label(lang), tally.count(e)))
        .collect();
    println!("Elements: {}", counts.join(", "));

    if let Some(v) = &a.void_branches {
        let hits: Vec<&str> = v.hits.iter().map(|p| p.label(lang)).collect();
        println!(
            "Void:   {}{} hits [{}]",
            v.branches[0].label(lang),
            v.branches[1].label(lang),
            hits.join(", ")
        );
    }

    if !a.transformations.is_empty() {
        println!("Stem transformations:");
        for t in &a.transformations {
            println!(
                "  {}-{}  {}{} -> {}  {} ({}%)",
                t.pair.0.label(lang),
                t.pair.1.label(lang),
                t.stems.0.label(lang),
                t.stems.1.label(lang),
                t.target_element.label(lang),
                t.status.label(lang),
                t.confidence
            );
        }
    }

    if !a.branch_interactions.is_empty() {
        println!("Branch interactions:");
        for i in &a.branch_interactions {
            println!(
                "  {}-{}  {}{}  {}  severity {}",
                i.pair.0.label(lang),
                i.pair.1.label(lang),
                i.branches.0.label(lang),
                i.branches.1.label(lang),
                i.kind.label(lang),
                i.severity
            );
        }
    }

    for t in &a.trio_combinations {
        let branches: String = t.branches.iter().map(|b| b.label(lang)).collect();
        println!(
            "Trio:   {} {} -> {}",
            t.kind.label(lang),
            branches,
            t.element.label(lang)
        );
    }

    print_score("Strength:", &a.strength, lang);
    print_rooting(&a.rooting, lang);
    if !a.symbolic_stars.is_empty() {
        let stars: Vec<String> = a
            .symbolic_stars
            .iter()
            .map(|s| format!("{} ({})", s.star.label(lang), s.position.label(lang)))
            .collect();
        println!("Stars:    {}", stars.join(", "));
    }

    for r in &a.recurrence {
        println!(
            "Recurrence: {} on {} ({}%)",
            r.match_type.label(lang),
            r.natal.label(lang),
            r.confidence
        );
    }
}
