use jass_tournament::config::AppConfig;
use jass_tournament::display::{print_schedule, print_standings, write_schedule_to_file};
use jass_tournament::parser::load_roster;
use jass_tournament::schedule::summarize;
use jass_tournament::{logging, web, RankingMode, Tournament, TournamentSettings};

const USAGE: &str = "Usage:\n  jass-tournament <roster.csv|roster.txt> [tables]\n  jass-tournament standings <tournament.json> [total|average]\n  jass-tournament web [port]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args.get(2).and_then(|p| p.parse::<u16>().ok());
        let config = AppConfig::from_env().with_port(port);

        println!("Starting web server on port {}...", config.port);
        println!("Access the API at http://localhost:{}/api", config.port);

        web::start_server(config).await?;
        return Ok(());
    }

    if args.len() > 2 && args[1] == "standings" {
        let tournament = Tournament::from_json(&std::fs::read_to_string(&args[2])?)?;
        let mode = match args.get(3).map(String::as_str) {
            Some("average") => RankingMode::Average,
            _ => RankingMode::Total,
        };
        print_standings(&tournament.standings(mode));
        return Ok(());
    }

    // CLI mode: generate and print a schedule for a roster file
    let Some(roster_path) = args.get(1) else {
        println!("{}", USAGE);
        return Ok(());
    };

    println!("Loading roster from {}...", roster_path);
    let players = load_roster(roster_path)?;
    let tables = match args.get(2) {
        Some(t) => t.parse::<usize>()?,
        None => (players.len() / 4).max(1),
    };
    println!("Loaded {} players, {} table(s)", players.len(), tables);

    let config = AppConfig::from_env();
    let tournament = Tournament::create(&players, TournamentSettings::new(tables), config.tournament_ttl())?;
    let summary = summarize(&tournament.schedule, players.len());
    print_schedule(&tournament.schedule, &tournament.players, &summary);

    write_schedule_to_file(&tournament.schedule, &tournament.players, "schedule.txt")?;
    std::fs::write("tournament.json", tournament.to_json()?)?;
    println!("\nSchedule saved to schedule.txt, tournament {} saved to tournament.json", tournament.id);

    Ok(())
}
