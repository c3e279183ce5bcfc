use crate::config::{BORDER_COL_CHAR, BORDER_ROW_CHAR, FLOOR_CHAR, FRUIT_CHAR, SNAKE_CHAR};
use crate::fruit::Fruit;
use crate::snake::Snake;
use crate::{Coords, TermInt};

/// Character grid rebuilt every frame from the snake and the fruit.
pub struct Board {
    rows: TermInt,
    cols: TermInt,
    cells: Vec<char>,
}

impl Board {
    pub fn new(rows: TermInt, cols: TermInt) -> Self {
        let cells = vec![FLOOR_CHAR; rows as usize * cols as usize];
        Board { rows, cols, cells }
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = FLOOR_CHAR;
        }
    }

    pub fn rasterize(&mut self, snake: &Snake, fruit: &Fruit) {
        for pos in snake.body() {
            self.put(*pos, SNAKE_CHAR);
        }
        self.put(fruit.pos(), FRUIT_CHAR);
    }

    /// The whole frame, border included, followed by the score line.
    /// Lines end in `\r\n` because raw mode turns off newline translation.
    pub fn render(&self, score: u32) -> String {
        let mut out = String::with_capacity((self.cols as usize + 2) * (self.rows as usize + 1));

        for y in 0..self.rows {
            for x in 0..self.cols {
                let ch = if y == 0 || y == self.rows - 1 {
                    BORDER_ROW_CHAR
                } else if x == 0 || x == self.cols - 1 {
                    BORDER_COL_CHAR
                } else {
                    self.cells[self.index((x, y))]
                };
                out.push(ch);
            }
            out.push_str("\r\n");
        }

        out.push_str(&format!("Score: {}\r\n", score));
        out
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put(&mut self, pos: Coords, ch: char) {
        if pos.0 < self.cols && pos.1 < self.rows {
            let idx = self.index(pos);
            self.cells[idx] = ch;
        }
    }

    fn index(&self, pos: Coords) -> usize {
        self.cols as usize * pos.1 as usize + pos.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(frame: &str) -> Vec<&str> {
        frame.split("\r\n").collect()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new(4, 5);
        let frame = board.render(0);
        assert_eq!(frame, "#####\r\n#   #\r\n#   #\r\n#####\r\nScore: 0\r\n");
    }

    #[test]
    fn test_snake_and_fruit_drawn() {
        let mut board = Board::new(5, 6);
        let snake = Snake::from_body(vec![(2, 1), (1, 1)]);
        let fruit = Fruit::at((3, 3));

        board.rasterize(&snake, &fruit);
        let frame = board.render(7);
        let rows = lines(&frame);

        assert_eq!(rows[0], "######");
        assert_eq!(rows[1], "#oo  #");
        assert_eq!(rows[2], "#    #");
        assert_eq!(rows[3], "#  x #");
        assert_eq!(rows[4], "######");
        assert_eq!(rows[5], "Score: 7");
    }

    #[test]
    fn test_fruit_drawn_over_snake() {
        let mut board = Board::new(3, 3);
        let snake = Snake::new((1, 1));
        board.rasterize(&snake, &Fruit::at((1, 1)));
        assert_eq!(lines(&board.render(0))[1], "#x#");
    }

    #[test]
    fn test_border_hides_segment_on_last_column() {
        let mut board = Board::new(4, 5);
        let snake = Snake::from_body(vec![(4, 1), (3, 1)]);
        board.rasterize(&snake, &Fruit::at((1, 2)));
        assert_eq!(lines(&board.render(0))[1], "#  o#");
    }

    #[test]
    fn test_clear_wipes_previous_frame() {
        let mut board = Board::new(4, 4);
        board.rasterize(&Snake::new((1, 1)), &Fruit::at((2, 2)));
        board.clear();
        assert_eq!(board.render(0), Board::new(4, 4).render(0));
    }

    #[test]
    fn test_frame_size() {
        let board = Board::new(20, 30);
        let frame = board.render(12);
        let rows = lines(&frame);

        // 20 board rows, the score line, and the empty piece after the last \r\n
        assert_eq!(rows.len(), 22);
        assert!(rows[..20].iter().all(|row| row.chars().count() == 30));
        assert_eq!(rows[20], "Score: 12");
    }
}
