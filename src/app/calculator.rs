use std::fs::File;
use std::io::{self, BufRead};

use crate::{error, warn};
use crate::hand::{calc_tiles_to_win, evaluate_hand, parse_into_wins, score};
use crate::model::*;
use crate::util::common::*;
use crate::util::misc::*;

#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            return;
        }

        if let Err(e) = self.run_from_file(&file_path) {
            error!("{}", e);
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res<Verify> {
        let mut calculator = Calculator::new(self.detail);
        calculator.parse(exp)?;
        Ok(calculator.run())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

// 式の書式: 手牌[+][,ポン...][/得点]
//   手牌の最後の牌を和了牌とする. 末尾の'+'は捨て牌での和了(ツモではない)
//   例: "b11123455567899", "b11144499+,b222,b777/3"
#[derive(Debug)]
struct Calculator {
    detail: bool,
    // evaluate_hand params
    hand: TileTable,
    melds: Vec<Meld>,
    winning_tile: Option<Tile>,
    is_self_drawn: bool,
    // score verify
    score: Option<Score>,
}

impl Calculator {
    fn new(detail: bool) -> Self {
        Self {
            detail,
            hand: TileTable::default(),
            melds: vec![],
            winning_tile: None,
            is_self_drawn: true,
            score: None,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        if exps.len() > 2 {
            Err(format!("too many '/' sections: {}", input))?;
        }
        self.parse_hand_meld(exps[0])?;
        if exps.len() > 1 {
            self.score = Some(exps[1].parse::<Score>()?);
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn parse_hand_meld(&mut self, input: &str) -> Res {
        let mut exps = input.split(',');
        let exp_hand = exps.next().unwrap_or("");
        let exp_hand = match exp_hand.strip_suffix('+') {
            Some(h) => {
                self.is_self_drawn = false;
                h
            }
            None => exp_hand,
        };

        let tiles = tiles_from_string(exp_hand)?;
        if tiles.is_empty() {
            Err("empty hand")?;
        }
        self.hand = tiles_to_tile_table(&tiles);
        self.winning_tile = tiles.last().copied();

        for exp_meld in exps {
            self.melds.push(meld_from_string(exp_meld)?);
        }

        // 同じ牌は4枚まで 超えている場合の判定結果は保証しない
        let mut visible = self.hand;
        for m in &self.melds {
            for &t in &m.tiles {
                inc_tile(&mut visible, t);
            }
        }
        for t in tiles_in_search_order() {
            if count_tile(&visible, t) > TILE {
                warn!("more than {} copies of {}", TILE, t);
            }
        }

        Ok(())
    }

    fn run(&self) -> Verify {
        let ctx = self
            .winning_tile
            .and_then(|t| evaluate_hand(&self.hand, &self.melds, t, self.is_self_drawn));

        let result = if let Some(ctx) = ctx {
            if self.detail {
                for d in parse_into_wins(&self.hand, &self.melds) {
                    println!("{} => {}", d, score(&d, self.is_self_drawn));
                }
            }
            println!("{}", ctx);
            Some(ctx.score)
        } else {
            println!("not win hand");
            let waits = calc_tiles_to_win(&self.hand, &self.melds);
            if !waits.is_empty() {
                println!("winning tiles: {}", vec_to_string(&waits));
            }
            None
        };

        let verify = match self.score {
            Some(sc) if result == Some(sc) || (sc == 0 && result.is_none()) => Verify::Ok,
            Some(_) => Verify::Error,
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        verify
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d]
    $ cargo run C -f FILE [-d]
Expression
    HAND[+][,MELD...][/SCORE]  e.g. b11123455567899, b11144499+,b222,b777/3
Options
    -d: print every decomposition
    -f: read expressions from file instead of a commandline expression
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/win_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false);
            calculator.parse(&e).unwrap();
            assert_eq!(Verify::Ok, calculator.run(), "{}", exp);
        }
    }
}

#[test]
fn test_calculator_parse() {
    let mut c = Calculator::new(false);
    c.parse("b11144499+,b222,b777/3").unwrap();
    assert!(!c.is_self_drawn);
    assert_eq!(c.melds.len(), 2);
    assert_eq!(c.winning_tile, Some(Tile(Suit::B, 9)));
    assert_eq!(c.score, Some(3));
    assert_eq!(c.run(), Verify::Ok);

    let mut c = Calculator::new(false);
    c.parse("b11123455567899/1").unwrap();
    assert_eq!(c.run(), Verify::Error);

    assert!(Calculator::new(false).parse("b111,b123").is_err());
    assert!(Calculator::new(false).parse("x123").is_err());
    assert!(Calculator::new(false).parse("/2").is_err());
}
