use clap::{Args, Parser, Subcommand};
use tracing::debug;
use ziwei_base::{FiveElementsClass, Gender, PalaceName, Scope, StemBranch, branch_at};
use ziwei_calendar::{AstronomicalCalendar, CalendarOracle, SolarDate, YearBoundary};
use ziwei_chart::major_star::{tianfu_index, ziwei_index};
use ziwei_chart::{
    AgeConvention, Algorithm, BirthInput, Chart, ChartConfig, HoroscopeLayer, Palace,
    SurroundedPalaces,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Birth data and chart settings shared by the chart commands.
#[derive(Args)]
struct BirthArgs {
    /// Solar birth date (YYYY-MM-DD, China civil time)
    #[arg(long)]
    date: String,
    /// Time index 0-12 (0 = early Zi, 1 = Chou, ... 12 = late Zi)
    #[arg(long)]
    time: u8,
    /// Gender: male or female
    #[arg(long)]
    gender: String,
    /// School: standard or zhongzhou
    #[arg(long, default_value = "standard")]
    algorithm: String,
    /// Birth-year boundary: normal (lunar new year) or exact (立春)
    #[arg(long, default_value = "normal")]
    year_boundary: String,
    /// Horoscope-year boundary: normal or exact
    #[arg(long, default_value = "exact")]
    horoscope_boundary: String,
    /// Nominal age counting: natural or birthday
    #[arg(long, default_value = "natural")]
    age_convention: String,
    /// Count a leap month's second half as the following month
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    fix_leap_month: bool,
    /// Fix the soul palace to a stem-branch pair, e.g. 壬午
    #[arg(long)]
    anchor: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Horoscope layers of a chart at a target moment
    Horoscope {
        #[command(flatten)]
        birth: BirthArgs,
        /// Target solar date (YYYY-MM-DD)
        #[arg(long)]
        target: String,
        /// Target time index 0-12
        #[arg(long, default_value = "0")]
        target_time: u8,
        /// Palace to locate in every layer
        #[arg(long, default_value = "soul")]
        palace: String,
    },
    /// The four palaces around a palace
    Surround {
        #[command(flatten)]
        birth: BirthArgs,
        /// Palace key or Chinese name (soul, wealth, 命宫, body, ...)
        #[arg(long, default_value = "soul")]
        palace: String,
    },
    /// Lunar date and four pillars of a solar date
    Lunar {
        /// Solar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time index 0-12
        #[arg(long, default_value = "0")]
        time: u8,
        /// Year boundary: normal or exact
        #[arg(long, default_value = "normal")]
        boundary: String,
    },
    /// Ziwei and Tianfu positions for a lunar day and bureau
    Ziwei {
        /// Lunar day 1-30
        day: u8,
        /// Five-elements bureau 2-6
        #[arg(long)]
        bureau: u8,
    },
}

fn parse_date(s: &str) -> SolarDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn parse_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid gender: {s}");
        eprintln!("Valid: male, female");
        std::process::exit(1);
    })
}

fn parse_algorithm(s: &str) -> Algorithm {
    match s.to_lowercase().as_str() {
        "standard" | "default" => Algorithm::Standard,
        "zhongzhou" => Algorithm::Zhongzhou,
        _ => {
            eprintln!("Invalid algorithm: {s}");
            eprintln!("Valid: standard, zhongzhou");
            std::process::exit(1);
        }
    }
}

fn parse_boundary(s: &str) -> YearBoundary {
    match s.to_lowercase().as_str() {
        "normal" => YearBoundary::Normal,
        "exact" => YearBoundary::Exact,
        _ => {
            eprintln!("Invalid year boundary: {s}");
            eprintln!("Valid: normal, exact");
            std::process::exit(1);
        }
    }
}

fn parse_age_convention(s: &str) -> AgeConvention {
    match s.to_lowercase().as_str() {
        "natural" => AgeConvention::Natural,
        "birthday" => AgeConvention::Birthday,
        _ => {
            eprintln!("Invalid age convention: {s}");
            eprintln!("Valid: natural, birthday");
            std::process::exit(1);
        }
    }
}

fn parse_anchor(s: &str) -> StemBranch {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid anchor: {e}");
        std::process::exit(1);
    })
}

fn require_bureau(divisor: u8) -> FiveElementsClass {
    FiveElementsClass::from_divisor(divisor).unwrap_or_else(|| {
        eprintln!("Invalid bureau: {divisor} (2-6)");
        std::process::exit(1);
    })
}

fn require_palace_name(s: &str) -> PalaceName {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn build_chart(cal: &AstronomicalCalendar, args: &BirthArgs) -> Chart {
    let config = ChartConfig {
        algorithm: parse_algorithm(&args.algorithm),
        year_boundary: parse_boundary(&args.year_boundary),
        horoscope_boundary: parse_boundary(&args.horoscope_boundary),
        age_convention: parse_age_convention(&args.age_convention),
    };
    let mut birth = BirthInput::new(parse_date(&args.date), args.time, parse_gender(&args.gender))
        .unwrap_or_else(|e| {
            eprintln!("Invalid birth input: {e}");
            std::process::exit(1);
        })
        .with_fix_leap_month(args.fix_leap_month);
    if let Some(anchor) = &args.anchor {
        birth = birth.with_anchor(parse_anchor(anchor));
    }
    debug!(?config, ?birth, "casting chart");
    Chart::build(cal, birth, config).unwrap_or_else(|e| {
        eprintln!("Failed to cast chart: {e}");
        std::process::exit(1);
    })
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}

fn print_palace(p: &Palace) {
    let mut flags = String::new();
    if p.is_body_palace {
        flags.push_str(" [身宫]");
    }
    if p.is_primary_palace {
        flags.push_str(" [来因]");
    }
    println!(
        "{:>2} {}{} {}{}  {}-{}",
        p.index,
        p.stem,
        p.branch,
        p.name,
        flags,
        p.decadal.start,
        p.decadal.end
    );
    println!("   主星: {}", join(&p.major_stars));
    println!("   辅星: {}", join(&p.minor_stars));
    println!("   杂耀: {}", join(&p.adjective_stars));
    println!(
        "   {} {} {} {}",
        p.changsheng12.name(),
        p.boshi12.name(),
        p.jiangqian12.name(),
        p.suiqian12.name()
    );
    println!("   小限: {}", join(p.ages));
}

fn print_chart(c: &Chart) {
    println!("Solar:   {}", c.solar_date());
    println!("Lunar:   {}", c.lunar_date.to_chinese());
    println!("Pillars: {}", c.pillars);
    println!("Bureau:  {}", c.five_elements.name());
    println!(
        "Soul:    {}  master {}",
        c.soul_palace().branch,
        c.soul_master
    );
    println!(
        "Body:    {}  master {}",
        c.body_palace().branch,
        c.body_master
    );
    println!("School:  {}", c.config.algorithm.name());
    println!();
    for p in &c.palaces {
        print_palace(p);
    }
}

fn print_layer(label: &str, layer: &HoroscopeLayer) {
    println!(
        "{label:<8} {}{} at {} ({})  化: {}",
        layer.stem,
        layer.branch,
        layer.index,
        branch_at(layer.index),
        join(layer.mutagens)
    );
    if !layer.stars.is_empty() {
        let stars = layer
            .stars
            .iter()
            .map(|p| format!("{}@{}", p.star, branch_at(p.index)));
        println!("         {}", join(stars));
    }
}

fn print_surround(s: &SurroundedPalaces<'_>) {
    for (label, p) in [
        ("target", s.target),
        ("opposite", s.opposite),
        ("wealth", s.wealth),
        ("career", s.career),
    ] {
        println!("{label:<9} {}{} {}  {}", p.stem, p.branch, p.name, join(p.stars()));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cal = AstronomicalCalendar::new();

    match cli.command {
        Commands::Chart { birth } => {
            let chart = build_chart(&cal, &birth);
            print_chart(&chart);
        }

        Commands::Horoscope {
            birth,
            target,
            target_time,
            palace,
        } => {
            let name = require_palace_name(&palace);
            let chart = build_chart(&cal, &birth);
            let h = chart
                .horoscope(&cal, parse_date(&target), target_time)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to compute horoscope: {e}");
                    std::process::exit(1);
                });
            println!("Target:  {} {}", h.solar_date, h.lunar_date.to_chinese());
            println!("Pillars: {}", h.pillars);
            println!("Age:     {}", h.nominal_age);
            match &h.decadal {
                Some(layer) if h.childhood => print_layer("decadal*", layer),
                Some(layer) => print_layer(Scope::Decadal.key(), layer),
                None => println!("decadal  -"),
            }
            match &h.age {
                Some(layer) => print_layer(Scope::Age.key(), layer),
                None => println!("age      -"),
            }
            print_layer(Scope::Yearly.key(), &h.yearly);
            print_layer(Scope::Monthly.key(), &h.monthly);
            print_layer(Scope::Daily.key(), &h.daily);
            print_layer(Scope::Hourly.key(), &h.hourly);
            println!();
            for scope in ziwei_base::ALL_SCOPES {
                match h.palace(name, scope) {
                    Some(p) => println!("{:<8} {} at {}{}", scope.key(), name, p.stem, p.branch),
                    None => println!("{:<8} {} -", scope.key(), name),
                }
            }
        }

        Commands::Surround { birth, palace } => {
            let chart = build_chart(&cal, &birth);
            let s = chart.surrounded_palaces_named(&palace).unwrap_or_else(|e| {
                eprintln!("{e}");
                eprintln!("Valid: {}", join(ziwei_base::ALL_PALACE_NAMES.map(|n| n.key())));
                std::process::exit(1);
            });
            print_surround(&s);
        }

        Commands::Lunar {
            date,
            time,
            boundary,
        } => {
            let date = parse_date(&date);
            let boundary = parse_boundary(&boundary);
            let result = cal.solar_to_lunar(date).and_then(|lunar| {
                let days = cal.lunar_month_days(date)?;
                let pillars = cal.four_pillars(date, time, boundary)?;
                Ok((lunar, days, pillars))
            });
            match result {
                Ok((lunar, days, pillars)) => {
                    println!("{} ({lunar})", lunar.to_chinese());
                    println!("Month length: {days} days");
                    println!("Pillars: {pillars}");
                }
                Err(e) => {
                    eprintln!("Conversion failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Ziwei { day, bureau } => {
            if !(1..=30).contains(&day) {
                eprintln!("Invalid lunar day: {day} (1-30)");
                std::process::exit(1);
            }
            let class = require_bureau(bureau);
            let ziwei = ziwei_index(day, class.divisor());
            let tianfu = tianfu_index(ziwei);
            println!("局: {}", class.name());
            println!("紫微: {} ({})", branch_at(ziwei), ziwei);
            println!("天府: {} ({})", branch_at(tianfu), tianfu);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn horoscope_defaults() {
        let cli = Cli::try_parse_from([
            "ziwei", "horoscope", "--date", "2000-08-16", "--time", "2", "--gender", "female",
            "--target", "2023-10-01",
        ])
        .unwrap();
        match cli.command {
            Commands::Horoscope { birth, target_time, palace, .. } => {
                assert!(birth.fix_leap_month);
                assert_eq!(birth.horoscope_boundary, "exact");
                assert_eq!(target_time, 0);
                assert_eq!(palace, "soul");
            }
            _ => panic!("expected horoscope"),
        }
    }

    #[test]
    fn leap_fix_can_be_disabled() {
        let cli = Cli::try_parse_from([
            "ziwei", "chart", "--date", "2023-04-10", "--time", "0", "--gender", "m",
            "--fix-leap-month", "false",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { birth } => assert!(!birth.fix_leap_month),
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn value_parsers() {
        assert_eq!(parse_algorithm("Zhongzhou"), Algorithm::Zhongzhou);
        assert_eq!(parse_boundary("exact"), YearBoundary::Exact);
        assert_eq!(parse_age_convention("birthday"), AgeConvention::Birthday);
        assert_eq!(parse_gender("女"), Gender::Female);
        assert_eq!(require_bureau(3), FiveElementsClass::Wood3);
    }
}
