// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt, fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{info, warn};
use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};
use regex::Regex;

use seabattle::{
    board::{BoardView, CannotPlaceReason, Coordinate, Grid, RectDimensions, TileAppearance},
    game::{GameController, GameError, GameState, Player, Score, Settings, Targeting},
    ships::{Orientation, ShipName},
};

mod logging;

/// Smallest board edge; the carrier has to fit in at least one direction.
const MIN_SIZE: usize = 5;

/// Largest board edge that still fits in a terminal.
const MAX_SIZE: usize = 26;

/// Number of entries kept in the high score table.
const MAX_SCORES: usize = 10;

fn main() -> io::Result<()> {
    logging::init_logging();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first-player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("scores")
                .short("s")
                .long("scores")
                .value_name("FILE")
                .help("file the high score table is kept in")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("WIDTH")
                .help("number of columns on the board")
                .takes_value(true)
                .default_value("10")
                .validator(validate_size),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("HEIGHT")
                .help("number of rows on the board")
                .takes_value(true)
                .default_value("10")
                .validator(validate_size),
        )
        .get_matches();

    let settings = build_settings(&matches);
    let scores_path = matches.value_of_os("scores").map(PathBuf::from);
    let mut scores = match &scores_path {
        Some(path) => load_scores(path)?,
        None => Vec::new(),
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();
    let mut controller = GameController::new(settings);

    while !controller.is_quitting() {
        match controller.current_state() {
            GameState::Quitting => break,
            GameState::MainMenu => main_menu(&mut controller, &mut input)?,
            GameState::GameMenu => game_menu(&mut controller, &mut input)?,
            GameState::Settings => settings_menu(&mut controller, &mut input)?,
            GameState::VolumeAdjust => volume_menu(&mut controller, &mut input)?,
            GameState::Rules => show_page(&mut controller, &mut input, RULES)?,
            GameState::Controls => show_page(&mut controller, &mut input, CONTROLS)?,
            GameState::HighScores => {
                show_scores(&scores);
                show_page(&mut controller, &mut input, "")?;
            }
            GameState::Deploying => deploy(&mut rng, &mut controller, &mut input)?,
            GameState::Discovering => discover(&mut rng, &mut controller, &mut input)?,
            GameState::EndingGame => end_game(
                &mut controller,
                &mut input,
                &mut scores,
                scores_path.as_deref(),
            )?,
        }
    }
    println!("Goodbye!");
    Ok(())
}

/// Check a board size given on the command line.
fn validate_size(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(size) if size >= MIN_SIZE && size <= MAX_SIZE => Ok(()),
        Ok(size) => Err(format!(
            "board size must be in range [{},{}], got {}",
            MIN_SIZE, MAX_SIZE, size
        )),
        Err(_) => Err(format!("invalid board size: {}", value)),
    }
}

/// Build the match settings from the command line.
fn build_settings(matches: &ArgMatches) -> Settings {
    let mut settings = Settings::default();
    if let Some(choice) = matches.value_of("first_player") {
        settings.first_player = match choice.to_ascii_lowercase().as_str() {
            "human" | "me" => Player::Human,
            "computer" | "bot" => Player::Computer,
            "random" | "rand" => random_player(),
            _ => unreachable!(),
        };
    }
    let width = value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit());
    settings.dimensions = RectDimensions::new(width, height);
    settings
}

fn random_player() -> Player {
    if rand::random() {
        Player::Human
    } else {
        Player::Computer
    }
}

/// Top level menu, shown when no match is running.
fn main_menu(
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Choice {
        Play,
        Open(GameState),
        Quit,
    }
    println!();
    println!("=== BATTLESHIP ===");
    println!("play | settings | rules | controls | scores | quit");
    let choice = input.read_input_lower(">", |input| match input {
        "play" | "p" | "start" | "new" => Some(Choice::Play),
        "settings" | "options" => Some(Choice::Open(GameState::Settings)),
        "rules" => Some(Choice::Open(GameState::Rules)),
        "controls" | "help" | "?" => Some(Choice::Open(GameState::Controls)),
        "scores" | "highscores" | "high scores" => Some(Choice::Open(GameState::HighScores)),
        "quit" | "exit" | "q" => Some(Choice::Quit),
        other => {
            println!("Invalid selection \"{}\".", other);
            None
        }
    })?;
    match choice {
        Choice::Play => controller.start_game(),
        Choice::Open(state) => controller.add_new_state(state),
        Choice::Quit => {
            controller.end_current_state();
        }
    }
    Ok(())
}

/// Menu opened from inside a match.
fn game_menu(
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Choice {
        Resume,
        Open(GameState),
        Restart,
        Abandon,
    }
    println!();
    println!("=== GAME MENU ===");
    println!("resume | settings | volume | rules | controls | restart | quit");
    let choice = input.read_input_lower(">", |input| match input {
        "resume" | "back" | "r" | "" => Some(Choice::Resume),
        "settings" | "options" => Some(Choice::Open(GameState::Settings)),
        "volume" => Some(Choice::Open(GameState::VolumeAdjust)),
        "rules" => Some(Choice::Open(GameState::Rules)),
        "controls" | "help" | "?" => Some(Choice::Open(GameState::Controls)),
        "restart" | "new" => Some(Choice::Restart),
        "quit" | "q" | "menu" => Some(Choice::Abandon),
        other => {
            println!("Invalid selection \"{}\".", other);
            None
        }
    })?;
    match choice {
        Choice::Resume => {
            controller.end_current_state();
        }
        Choice::Open(state) => controller.add_new_state(state),
        Choice::Restart => controller.start_game(),
        Choice::Abandon => {
            controller.abandon_game();
        }
    }
    Ok(())
}

fn settings_menu(
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Choice {
        First(Player),
        Volume,
        Back,
    }
    let settings = controller.settings();
    println!();
    println!("=== SETTINGS ===");
    println!("Board:        {}x{}", settings.dimensions.width(), settings.dimensions.height());
    println!("First player: {}", PlayerName(settings.first_player));
    println!("Volume:       {}%", volume_percent(settings.volume()));
    println!("first <human|computer|random> | volume | back");
    let choice = input.read_input_lower(">", |input| match input {
        "first human" | "first me" => Some(Choice::First(Player::Human)),
        "first computer" | "first bot" => Some(Choice::First(Player::Computer)),
        "first random" | "first rand" => Some(Choice::First(random_player())),
        "volume" => Some(Choice::Volume),
        "back" | "b" | "" => Some(Choice::Back),
        other => {
            println!("Invalid selection \"{}\".", other);
            None
        }
    })?;
    match choice {
        Choice::First(player) => {
            controller.settings_mut().first_player = player;
            if controller.session().is_some() {
                println!("The new first player applies from the next match.");
            }
        }
        Choice::Volume => controller.add_new_state(GameState::VolumeAdjust),
        Choice::Back => {
            controller.end_current_state();
        }
    }
    Ok(())
}

fn volume_menu(
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Choice {
        Step(bool),
        Back,
    }
    let opened_from = match controller.return_to() {
        Some(GameState::MainMenu) => "main menu",
        Some(GameState::GameMenu) => "game menu",
        Some(GameState::Settings) => "settings",
        _ => "previous screen",
    };
    println!();
    println!("=== VOLUME ===");
    println!("Volume: {}%", volume_percent(controller.settings().volume()));
    println!("up (+) | down (-) | back to {}", opened_from);
    let choice = input.read_input_lower(">", |input| match input {
        "up" | "+" | "u" => Some(Choice::Step(true)),
        "down" | "-" | "d" => Some(Choice::Step(false)),
        "back" | "b" | "" => Some(Choice::Back),
        other => {
            println!("Invalid selection \"{}\".", other);
            None
        }
    })?;
    match choice {
        Choice::Step(up) => controller.settings_mut().step_volume(up),
        Choice::Back => {
            controller.end_current_state();
        }
    }
    Ok(())
}

fn volume_percent(volume: f32) -> u32 {
    (volume * 100.0).round() as u32
}

/// Print a page of text and return to the previous state once the player is done reading.
fn show_page(
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
    text: &str,
) -> io::Result<()> {
    if !text.is_empty() {
        println!();
        println!("{}", text);
    }
    input.read_input("Press enter to go back.", |_| Some(()))?;
    controller.end_current_state();
    Ok(())
}

const RULES: &str = "=== RULES ===
Each side hides a fleet on its own grid: a carrier (5 tiles), a battleship (4),
a cruiser (3), a submarine (3) and a destroyer (2). Ships lie in a straight
line and may not overlap.

Players take turns firing at the enemy grid. A hit or a sunk ship lets you fire
again; a miss, or a shot at a tile you already attacked, passes the turn.
The first to sink the whole enemy fleet wins.

Score: 12 points per hit, minus 1 per shot fired, minus 20 per ship you lost.
Losing the match scores 0.";

const CONTROLS: &str = "=== CONTROLS ===
While deploying:
    place <ship> <x>,<y> <dir>  place the ship with its bow at the given coordinate.
        Possible directions are \"horizontal\" (\"right\") and \"vertical\" (\"down\").
    remove <ship>               clear the placement of the specified ship, or \"all\".
    clear                       clears all ship placements.
    randomize                   randomize the placements of the remaining ships.
    done                        if all ships are placed, start the battle.
While fighting:
    fire <x>,<y>                fire at the enemy grid.
At any time during a match:
    menu                        open the game menu.
    help                        show the commands for the current phase.

Available Ships:
    \"carrier\" (\"cv\")
    \"battleship\" (\"bb\")
    \"cruiser\" (\"cl\")
    \"submarine\" (\"ss\")
    \"destroyer\" (\"dd\")";

/// Handle one deployment command from the human. The computer deploys as soon as the
/// match starts.
fn deploy(
    rng: &mut impl Rng,
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Done,
        Place(ShipName, Coordinate, Orientation),
        Remove(ShipName),
        Clear,
        RandomizeRest,
        Menu,
        Help,
    }
    /// Matcher for commands with args.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put|move)\s+
        (?P<ship>\w+)\s+
        (?:(?:at|on|to|->|=>)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)\s+
        (?P<dir>\w+)$",
        )
        .unwrap()
    });
    static REMOVE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:un-?place|remove)\s+
        (?P<ship>\w+)$",
        )
        .unwrap()
    });

    let computer_ready = controller
        .grid(Player::Computer)
        .map_or(false, Grid::all_deployed);
    if !computer_ready {
        if let Err(err) = controller.deploy_randomly(Player::Computer, rng) {
            warn!("computer could not deploy: {}", err);
            println!("The computer could not fit its fleet on this board.");
            controller.abandon_game();
            return Ok(());
        }
    }

    let dims = match controller.grid(Player::Human) {
        Some(grid) => {
            println!();
            if grid.all_deployed() {
                println!("All ships placed, type done to start the game");
            } else {
                let names: Vec<_> = ShipName::iter_fleet(grid.pending_ships())
                    .map(|ship| ShipFullName(ship).to_string())
                    .collect();
                println!("Remaining ships to place: {}", names.join(", "));
            }
            println!("Your current board setup:");
            show_revealed_board(grid);
            println!();
            *grid.dimensions()
        }
        None => {
            controller.abandon_game();
            return Ok(());
        }
    };

    let cmd = input.read_input_lower(">", |input| match input {
        "?" | "help" | "h" => Some(Command::Help),
        "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
        "done" | "start" => Some(Command::Done),
        "clear" => Some(Command::Clear),
        "menu" | "m" => Some(Command::Menu),
        other => {
            if let Some(captures) = PLACE.captures(other) {
                let ship = parse_ship(&captures["ship"])?;
                let coord = parse_coordinate(&dims, &captures["x"], &captures["y"])?;
                let dir = match &captures["dir"] {
                    "horizontal" | "h" | "right" | "r" | "east" | "e" => Orientation::Horizontal,
                    "vertical" | "v" | "down" | "d" | "south" | "s" => Orientation::Vertical,
                    other => {
                        println!(
                            "invalid direction {}, choose \"horizontal\" or \"vertical\"",
                            other
                        );
                        return None;
                    }
                };
                Some(Command::Place(ship, coord, dir))
            } else if let Some(captures) = REMOVE.captures(other) {
                match &captures["ship"] {
                    "all" => Some(Command::Clear),
                    name => parse_ship(name).map(Command::Remove),
                }
            } else {
                println!("Invalid ship-placement command \"{}\". Use '?' for help", other);
                None
            }
        }
    })?;

    match cmd {
        Command::Done => match controller.end_deployment() {
            Ok(()) => println!("All fleets deployed. Commence firing!"),
            Err(GameError::NotDeployed(Player::Human)) => {
                println!("You must place all your ships first!")
            }
            Err(err) => println!("{}", err),
        },
        Command::Place(ship, origin, dir) => {
            match controller.move_ship(Player::Human, ship, origin, dir) {
                Ok(()) => {}
                Err(GameError::Place(err)) => match err.reason() {
                    CannotPlaceReason::Occupied => {
                        println!("Invalid placement: overlaps existing ship.")
                    }
                    CannotPlaceReason::OutOfBounds => {
                        println!("Invalid placement: not enough space on the board.")
                    }
                },
                Err(err) => println!("{}", err),
            }
        }
        Command::Remove(ship) => {
            if let Err(err) = controller.remove_ship(Player::Human, ship) {
                println!("{}", err);
            }
        }
        Command::Clear => {
            for &ship in ShipName::ALL {
                if let Err(err) = controller.remove_ship(Player::Human, ship) {
                    println!("{}", err);
                    break;
                }
            }
        }
        Command::RandomizeRest => {
            if let Err(err) = controller.deploy_randomly(Player::Human, rng) {
                println!("Could not place the remaining ships: {}", err);
            }
        }
        Command::Menu => controller.add_new_state(GameState::GameMenu),
        Command::Help => println!("{}", CONTROLS),
    }
    Ok(())
}

/// Handle one turn of combat. If the computer is due to fire it fires first.
fn discover(
    rng: &mut impl Rng,
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Fire(Coordinate),
        Menu,
        Help,
    }
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:fire|shoot|attack|f)\s+
        (?:(?:at|on)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
        )
        .unwrap()
    });

    let mut targeting = RandomTargeting { rng };
    let computer_due = controller
        .session()
        .map_or(false, |session| session.current() == Player::Computer);
    if computer_due {
        match controller.computer_turn(&mut targeting) {
            Ok(reports) => {
                for report in &reports {
                    println!("{}", report.message());
                }
            }
            Err(err) => println!("{}", err),
        }
        return Ok(());
    }

    let dims = match (controller.view_of(Player::Computer), controller.grid(Player::Human)) {
        (Some(enemy), Some(own)) => {
            println!();
            println!("Enemy waters ({} ships sunk):", enemy.ships_killed());
            show_board(
                enemy.iter_rows().map(|row| row.map(HiddenCell)),
                enemy.dimensions().width(),
            );
            println!();
            println!("Your fleet:");
            show_revealed_board(own);
            println!();
            enemy.dimensions()
        }
        _ => {
            controller.abandon_game();
            return Ok(());
        }
    };

    let cmd = input.read_input_lower(">", |input| match input {
        "?" | "help" | "h" => Some(Command::Help),
        "menu" | "m" => Some(Command::Menu),
        other => {
            if let Some(captures) = FIRE.captures(other) {
                parse_coordinate(&dims, &captures["x"], &captures["y"]).map(Command::Fire)
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    })?;

    match cmd {
        Command::Fire(coord) => match controller.attack(coord, &mut targeting) {
            Ok(reports) => {
                for report in &reports {
                    println!("{}", report.message());
                }
            }
            Err(err) => println!("{}", err),
        },
        Command::Menu => controller.add_new_state(GameState::GameMenu),
        Command::Help => println!("{}", CONTROLS),
    }
    Ok(())
}

/// Show the result of the match, record the score and return to the main menu.
fn end_game(
    controller: &mut GameController,
    input: &mut InputReader<impl BufRead>,
    scores: &mut Vec<Score>,
    scores_path: Option<&Path>,
) -> io::Result<()> {
    if let Some(grid) = controller.grid(Player::Computer) {
        println!();
        println!("The enemy fleet:");
        show_revealed_board(grid);
    }
    let result = match controller.finish_game() {
        Ok(result) => result,
        Err(err) => {
            warn!("could not finish the match: {}", err);
            controller.abandon_game();
            return Ok(());
        }
    };
    println!();
    match result.winner {
        Player::Human => println!("You sank the enemy fleet. Victory!"),
        Player::Computer => println!("Your fleet was destroyed. Defeat."),
    }
    println!(
        "Shots: {}  Hits: {}  Misses: {}",
        result.human.shots(),
        result.human.hits(),
        result.human.misses()
    );
    println!("Score: {}", result.score);

    if let Some(path) = scores_path {
        if qualifies(scores, result.score) {
            let score = input.read_input("New high score! Enter your name:", |name| {
                match Score::new(name, result.score) {
                    Ok(score) => Some(score),
                    Err(err) => {
                        println!("{}", err);
                        None
                    }
                }
            })?;
            record_score(scores, score);
            save_scores(path, scores)?;
        }
    }
    Ok(())
}

fn qualifies(scores: &[Score], value: i32) -> bool {
    scores.len() < MAX_SCORES || scores.iter().any(|score| score.value() < value)
}

/// Insert a score, keeping the table sorted and bounded.
fn record_score(scores: &mut Vec<Score>, score: Score) {
    scores.push(score);
    scores.sort_by(|a, b| b.value().cmp(&a.value()));
    scores.truncate(MAX_SCORES);
}

/// Read the high score table. A missing file is an empty table; malformed lines are
/// skipped.
fn load_scores(path: &Path) -> io::Result<Vec<Score>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };
    let mut scores = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Score>() {
            Ok(score) => scores.push(score),
            Err(err) => warn!("{}:{}: {}", path.display(), lineno + 1, err),
        }
    }
    scores.sort_by(|a, b| b.value().cmp(&a.value()));
    scores.truncate(MAX_SCORES);
    info!("loaded {} scores from {}", scores.len(), path.display());
    Ok(scores)
}

fn save_scores(path: &Path, scores: &[Score]) -> io::Result<()> {
    let mut text = String::new();
    for score in scores {
        text.push_str(&score.to_string());
        text.push('\n');
    }
    fs::write(path, text)?;
    info!("saved {} scores to {}", scores.len(), path.display());
    Ok(())
}

fn show_scores(scores: &[Score]) {
    println!();
    println!("=== HIGH SCORES ===");
    if scores.is_empty() {
        println!("No scores yet.");
    }
    for (rank, score) in scores.iter().enumerate() {
        println!("{:>2}. {:<20} {:>5}", rank + 1, score.name(), score.value());
    }
}

/// Parse a ship name or its abbreviation, printing a message if it is unknown.
fn parse_ship(name: &str) -> Option<ShipName> {
    match name {
        "cv" | "carrier" => Some(ShipName::Carrier),
        "bb" | "battleship" => Some(ShipName::Battleship),
        "ca" | "cl" | "cruiser" => Some(ShipName::Cruiser),
        "ss" | "sub" | "submarine" => Some(ShipName::Submarine),
        "dd" | "destroyer" => Some(ShipName::Destroyer),
        other => {
            println!("invalid ship: {}, choose \"carrier\", \"battleship\", \"cruiser\", \"submarine\", or \"destroyer\"", other);
            None
        }
    }
}

/// Parse an `x,y` pair into a coordinate on the board, printing a message if it is out of
/// range.
fn parse_coordinate(dims: &RectDimensions, x: &str, y: &str) -> Option<Coordinate> {
    let col = match x.parse::<usize>() {
        Ok(col) if col < dims.width() => col,
        _ => {
            println!("x must be in range [0,{}], got {}", dims.width() - 1, x);
            return None;
        }
    };
    let row = match y.parse::<usize>() {
        Ok(row) if row < dims.height() => row,
        _ => {
            println!("y must be in range [0,{}], got {}", dims.height() - 1, y);
            return None;
        }
    };
    Some(Coordinate::new(row, col))
}

/// Computer opponent which fires at a random tile it has not shot yet.
struct RandomTargeting<R> {
    rng: R,
}

impl<R: Rng> Targeting for RandomTargeting<R> {
    fn choose_target(&mut self, view: &dyn BoardView) -> Coordinate {
        let open = view.unshot_tiles();
        match open.choose(&mut self.rng) {
            Some(&coord) => coord,
            // Every tile has been shot; the match is already over.
            None => Coordinate::new(0, 0),
        }
    }
}

/// Print out the fully-revealed board, as seen by its owner.
fn show_revealed_board(grid: &Grid) {
    enum RevealedCell {
        Empty,
        Shot,
        NotShot(ShipAbbreviation),
        Hit(ShipAbbreviation),
        Sunk(ShipAbbreviation),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::NotShot(ship) => fmt::Display::fmt(ship, f),
                RevealedCell::Hit(ship) => f.pad(&format!("x{}", ship.abbrev())),
                RevealedCell::Sunk(ship) => f.pad(&format!("X{}", ship.abbrev())),
            }
        }
    }
    let dims = *grid.dimensions();
    show_board(
        dims.iter_rows().map(|row| {
            row.map(move |coord| match grid.tile(coord) {
                None => RevealedCell::Empty,
                Some(tile) => match tile.ship() {
                    None if tile.shot() => RevealedCell::Shot,
                    None => RevealedCell::Empty,
                    Some(ship) if ship.is_destroyed() => {
                        RevealedCell::Sunk(ShipAbbreviation(ship.name()))
                    }
                    Some(ship) if tile.shot() => RevealedCell::Hit(ShipAbbreviation(ship.name())),
                    Some(ship) => RevealedCell::NotShot(ShipAbbreviation(ship.name())),
                },
            })
        }),
        dims.width(),
    )
}

/// Display helper for a tile of the enemy's masked board.
struct HiddenCell(TileAppearance);

impl fmt::Display for HiddenCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            TileAppearance::Sea | TileAppearance::Ship => f.pad("~~"),
            TileAppearance::Miss => f.pad("x"),
            TileAppearance::Hit => f.pad("X"),
        }
    }
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>, width: usize) {
    print!("   ");
    for i in 0..width {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Display helper that prints a player's name.
struct PlayerName(Player);

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            Player::Human => "you",
            Player::Computer => "computer",
        })
    }
}

/// Display helper that prints the ship's full name.
struct ShipFullName(ShipName);

impl fmt::Display for ShipFullName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.0.as_str().to_ascii_lowercase())
    }
}

/// Display helper that prints the ship's type abbreviation
struct ShipAbbreviation(ShipName);

impl ShipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match self.0 {
            ShipName::Carrier => "cv",
            ShipName::Battleship => "bb",
            ShipName::Cruiser => "cl",
            ShipName::Submarine => "ss",
            ShipName::Destroyer => "dd",
        }
    }
}

impl fmt::Display for ShipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Print the prompt, clear the string buffer and read a line. End of input quits.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
