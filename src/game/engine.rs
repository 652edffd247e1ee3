use std::collections::VecDeque;

use crate::log;
use super::rng::GameRng;
use super::types::{Cell, Direction, GameOverReason, Point, StepOutcome};

/// The rules engine for a single-player game on a square grid.
///
/// The engine owns all game state. The host drives it with `set_direction`
/// on input events and `step` on a fixed-interval tick; everything else is a
/// read-only projection. Both operations are synchronous and complete in
/// O(snake length).
pub struct GameEngine {
    grid_size: usize,
    snake: VecDeque<Point>,
    food: Point,
    direction: Direction,
    score: u32,
    game_over: Option<GameOverReason>,
    paused: bool,
}

impl GameEngine {
    /// Creates a started game: a single-segment snake at the grid center,
    /// heading right, with food already placed on a free cell.
    pub fn new(grid_size: usize, rng: &mut GameRng) -> Self {
        let mut engine = Self {
            grid_size,
            snake: VecDeque::new(),
            food: Point::new(0, 0),
            direction: Direction::Right,
            score: 0,
            game_over: None,
            paused: false,
        };
        engine.reset(rng);
        engine
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn snake(&self) -> &VecDeque<Point> {
        &self.snake
    }

    pub fn head(&self) -> Point {
        *self.snake.front().expect("snake body is never empty")
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Updates the heading. Reversing into the snake's own neck is ignored,
    /// as is any input after the game has ended.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.game_over.is_none() && !direction.is_opposite(&self.direction) {
            self.direction = direction;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advances the game by one tick. This is the sole mutator of snake,
    /// food, score and the game-over flag.
    ///
    /// `score_multiplier` comes from the active difficulty tier; eating food
    /// is worth `floor(10 * score_multiplier)` points.
    pub fn step(&mut self, rng: &mut GameRng, score_multiplier: f64) -> StepOutcome {
        if self.paused || self.game_over.is_some() {
            return StepOutcome::Idle;
        }

        let next_head = match self.next_head_position() {
            Ok(point) => point,
            Err(reason) => {
                self.game_over = Some(reason);
                return StepOutcome::GameOver(reason);
            }
        };

        self.snake.push_front(next_head);

        if next_head == self.food {
            self.score += (10.0 * score_multiplier).floor() as u32;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );

            if self.snake.len() >= self.grid_size * self.grid_size {
                // No free cell left to hold food; the sampler must not run.
                self.game_over = Some(GameOverReason::BoardFull);
                return StepOutcome::GameOver(GameOverReason::BoardFull);
            }

            self.generate_food(rng);
            StepOutcome::AteFood
        } else {
            self.snake.pop_back();
            StepOutcome::Moved
        }
    }

    /// Resets to the start-of-game state and places fresh food.
    pub fn reset(&mut self, rng: &mut GameRng) {
        let center = self.grid_size / 2;
        self.snake.clear();
        self.snake.push_back(Point::new(center, center));
        self.direction = Direction::Right;
        self.score = 0;
        self.game_over = None;
        self.paused = false;
        self.generate_food(rng);
    }

    /// Fresh N x N projection of the current state, indexed `[y][x]`.
    /// Recomputed on every call; N is small enough that caching would not
    /// pay for itself.
    pub fn grid_view(&self) -> Vec<Vec<Cell>> {
        let mut grid = vec![vec![Cell::Empty; self.grid_size]; self.grid_size];
        for segment in &self.snake {
            grid[segment.y][segment.x] = Cell::Snake;
        }
        grid[self.food.y][self.food.x] = Cell::Food;
        grid
    }

    fn next_head_position(&self) -> Result<Point, GameOverReason> {
        let head = self.head();

        let next_head = match self.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= self.grid_size - 1 {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= self.grid_size - 1 {
                    return Err(GameOverReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        // The tail is excluded: it vacates its cell this tick unless food is
        // eaten, and the eat check happens after this one. Documented
        // original behavior, kept as-is.
        let tail = *self.snake.back().expect("snake body is never empty");
        if next_head != tail && self.snake.contains(&next_head) {
            return Err(GameOverReason::SelfCollision);
        }

        Ok(next_head)
    }

    /// Rejection-samples a free cell for food. Callers guarantee at least
    /// one free cell exists, so the loop terminates.
    fn generate_food(&mut self, rng: &mut GameRng) {
        loop {
            let candidate = Point::new(
                rng.random_range(0..self.grid_size),
                rng.random_range(0..self.grid_size),
            );
            if !self.snake.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }
    }

    #[cfg(test)]
    fn set_state_for_test(
        &mut self,
        snake: Vec<Point>,
        food: Point,
        direction: Direction,
    ) {
        self.snake = snake.into();
        self.food = food;
        self.direction = direction;
    }
}
