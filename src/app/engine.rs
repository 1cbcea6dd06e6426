use crate::actor::create_actor;
use crate::control::engine::Engine;
use crate::model::*;
use crate::util::misc::*;
use crate::{error, info};

// [App]
#[derive(Debug)]
pub struct EngineApp {
    seed: u64,
    n_game: u64,
    actor: String,
    write_dir: Option<String>,
}

impl EngineApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            n_game: 1,
            actor: "last".to_string(),
            write_dir: None,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s),
                "-g" => app.n_game = next_value(&mut it, s),
                "-a" => app.actor = next_value(&mut it, s),
                "-w" => app.write_dir = Some(next_value(&mut it, s)),
                opt => {
                    error!("unknown option: {}", opt);
                    print_usage();
                    std::process::exit(0);
                }
            }
        }

        app
    }

    pub fn run(self) {
        let mut wins = [0; SEAT];
        let mut scores = [0; SEAT];
        let mut n_draw = 0;

        let start = std::time::Instant::now();
        for seed in self.seed..self.seed + self.n_game {
            match self.run_single_game(seed) {
                Ok(Some((seat, ctx))) => {
                    wins[seat] += 1;
                    scores[seat] += ctx.score;
                }
                Ok(None) => n_draw += 1,
                Err(e) => {
                    error!("seed {}: {}", seed, e);
                    return;
                }
            }
        }

        println!("games: {}, no winner: {}", self.n_game, n_draw);
        for s in 0..SEAT {
            println!("seat{}: wins: {:4}, score: {:5}", s, wins[s], scores[s]);
        }
        println!(
            "total elapsed time: {:8.3}sec",
            start.elapsed().as_nanos() as f32 / 1000000000.0
        );
    }

    fn run_single_game(&self, seed: u64) -> Res<Option<(Seat, WinContext)>> {
        let mut actors = vec![];
        for s in 0..SEAT {
            actors.push(create_actor(&self.actor, seed.wrapping_add(s as u64))?);
        }
        let mut engine = Engine::new(seed, actors)?;
        let res = engine.run()?;

        if let Some(dir) = &self.write_dir {
            let path = format!("{}/{}.json", dir, seed);
            write_to_file(&path, &serde_json::to_string_pretty(engine.events())?)?;
            info!("game record written: {}", path);
        }

        Ok(res)
    }
}

fn print_usage() {
    error!(
        r"Usage
    $ cargo run E [-s SEED] [-g GAMES] [-a ACTOR] [-w DIR]
Options
    -s: seed of the first game (default: 0)
    -g: number of games, seeds are SEED, SEED+1, ... (default: 1)
    -a: actor for all seats, last or random (default: last)
    -w: write the event record of each game to DIR/SEED.json
"
    );
}

#[test]
fn test_engine_app_args() {
    let args: Vec<String> = ["-s", "5", "-g", "3", "-a", "random"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let app = EngineApp::new(args);
    assert_eq!(app.seed, 5);
    assert_eq!(app.n_game, 3);
    assert_eq!(app.actor, "random");
    assert!(app.write_dir.is_none());
    assert!(app.run_single_game(5).is_ok());
}

#[test]
fn test_engine_app_unknown_actor() {
    let app = EngineApp::new(vec!["-a".to_string(), "human".to_string()]);
    assert!(app.run_single_game(0).is_err());
}
