use std::thread::sleep;

use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::fruit::Fruit;
use crate::snake::{set_direction, Direction, Snake};
use crate::term::{Display, InputSource, Key};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EndReason {
    Collision,
    Interrupted,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver(EndReason),
}

pub struct SnakeGame<I, D, R> {
    config: GameConfig,
    input: I,
    display: D,
    rng: R,
    snake: Snake,
    fruit: Fruit,
    board: Board,
    direction: Option<Direction>,
    score: u32,
    state: GameState,
}

impl<I: InputSource, D: Display, R: Rng> SnakeGame<I, D, R> {
    pub fn new(config: GameConfig, input: I, display: D, mut rng: R) -> Result<Self> {
        config.validate()?;

        let fruit = Fruit::spawn(config.rows, config.cols, &mut rng);
        info!(rows = config.rows, cols = config.cols, fruit = ?fruit.pos(), "New game");

        Ok(SnakeGame {
            config,
            input,
            display,
            rng,
            snake: Snake::new(config.start),
            fruit,
            board: Board::new(config.rows, config.cols),
            direction: None,
            score: 0,
            state: GameState::Running,
        })
    }

    /// Runs ticks until the game ends, then shows the final score.
    pub fn play(&mut self) -> Result<()> {
        while self.tick()? == GameState::Running {
            sleep(self.config.tick_interval);
        }

        self.game_over()
    }

    pub fn tick(&mut self) -> Result<GameState> {
        if self.state != GameState::Running {
            return Ok(self.state);
        }

        if self.input.poll()? {
            match self.input.read_key()? {
                Some(Key::Interrupt) => {
                    self.state = GameState::GameOver(EndReason::Interrupted);
                    return Ok(self.state);
                }
                Some(Key::Char(key)) => self.steer(key),
                None => {}
            }
        }

        if self.snake.head() == self.fruit.pos() {
            self.eat();
        }

        let (rows, cols) = (self.config.rows, self.config.cols);

        self.display.clear()?;
        self.board.clear();
        self.snake.advance(self.direction, rows, cols);

        if self.snake.self_collision() {
            self.state = GameState::GameOver(EndReason::Collision);
            return Ok(self.state);
        }

        self.board.rasterize(&self.snake, &self.fruit);
        self.display.print(&self.board.render(self.score))?;

        Ok(self.state)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    ///////////////////////////////////////////////////////////////////////////

    fn steer(&mut self, key: char) {
        let new_direction = set_direction(self.direction, key);
        if new_direction != self.direction {
            debug!(from = ?self.direction, to = ?new_direction, "Direction changed");
            self.direction = new_direction;
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        self.snake.grow();
        self.fruit.relocate(self.config.rows, self.config.cols, &mut self.rng);
        info!(
            score = self.score,
            length = self.snake.len(),
            fruit = ?self.fruit.pos(),
            "Fruit eaten"
        );
    }

    fn game_over(&mut self) -> Result<()> {
        info!(score = self.score, state = ?self.state, "Game over");

        self.display.clear()?;
        self.display.print(&format!("Game Over\r\nFinal Score: {}\r\n", self.score))
    }
}

#[cfg(test)]
impl<I, D, R> SnakeGame<I, D, R> {
    fn with_snake(mut self, snake: Snake, direction: Option<Direction>) -> Self {
        self.snake = snake;
        self.direction = direction;
        self
    }

    fn with_fruit(mut self, pos: crate::Coords) -> Self {
        self.fruit = Fruit::at(pos);
        self
    }
}
