use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use monty::app::App;
use monty::build_info;
use monty::constants::TICK_INTERVAL_MS;
use monty::input::map_key;
use monty::ui::draw_app;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string("monty"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" | "-s" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse().ok());
                if seed.is_none() {
                    eprintln!("--seed requires a number");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'monty --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut app = App::new(rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_app(f, app))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let action = map_key(key_event, app.game.phase);
                if !app.handle(action, Instant::now()) {
                    return Ok(());
                }
            }
        }

        app.advance(Instant::now());
    }
}

fn print_help() {
    println!("Monty - Three-Door Puzzle\n");
    println!("Usage: monty [options]\n");
    println!("Options:");
    println!("  -s, --seed <N>  Seed the random source for a repeatable session");
    println!("  -v, --version   Show version information");
    println!("  -h, --help      Show this help message");
    println!();
    println!("Keys:");
    println!("  ←/→, Enter, 1-3  Pick a door");
    println!("  S / W            Stick or switch");
    println!("  R                Run the convergence simulation");
    println!("  N                Play again");
    println!("  Q / Esc          Quit");
}
