use std::fmt::Display;

use crate::node::{Color, Link};
use crate::tree::LlrbTree;

/// Columns used by a rendered subtree and the column of its root's center.
struct Span {
    width: usize,
    anchor: usize,
}

struct Canvas {
    rows: Vec<Vec<char>>,
    cell_width: usize,
    key_width: usize,
    value_width: usize,
}

impl Canvas {
    fn put(&mut self, row: usize, col: usize, ch: char) {
        let line = &mut self.rows[row];
        if line.len() <= col {
            line.resize(col + 1, ' ');
        }
        line[col] = ch;
    }

    fn put_str(&mut self, row: usize, col: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put(row, col + i, ch);
        }
    }

    fn marker(color: Color) -> char {
        match color {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }

    /// Draws the subtree at `depth` (root is 1) starting at column `offset`.
    /// Cells go on row `depth`; the markers joining a node to its children go
    /// on the same row, beside the node's cell.
    fn draw<K: Display, V: Display>(
        &mut self,
        node: &Link<K, V>,
        offset: usize,
        depth: usize,
    ) -> Option<Span> {
        let n = node.as_deref()?;
        let left = self.draw(&n.left, offset, depth + 1);
        let left_width = left.as_ref().map_or(0, |s| s.width);
        let start = offset + left_width;
        let right = self.draw(&n.right, start + self.cell_width, depth + 1);
        let right_width = right.as_ref().map_or(0, |s| s.width);

        if let (Some(span), Some(child)) = (&left, n.left.as_deref()) {
            self.put(depth, span.anchor, Self::marker(child.color));
            for col in span.anchor + 1..start {
                self.put(depth, col, '-');
            }
        }
        if let (Some(span), Some(child)) = (&right, n.right.as_deref()) {
            for col in start + self.cell_width..span.anchor {
                self.put(depth, col, '-');
            }
            self.put(depth, span.anchor, Self::marker(child.color));
        }

        let cell = format!(
            "({:>kw$}, {:>vw$})",
            n.key,
            n.value,
            kw = self.key_width,
            vw = self.value_width
        );
        self.put_str(depth, start, &cell);

        Some(Span {
            width: left_width + self.cell_width + right_width,
            anchor: start + self.cell_width / 2,
        })
    }
}

impl<K: Display, V: Display> LlrbTree<K, V> {
    /// Draws the tree as text, one row per level under a row holding the root
    /// marker. Each node is a `(key, value)` cell; the `R`/`B` marker above a
    /// child's cell is the color of its link, joined to the parent with `-`.
    pub fn render_ascii(&self) -> String {
        let key_width = self
            .keys()
            .map(|k| k.to_string().chars().count())
            .max()
            .unwrap_or(0);
        let value_width = self
            .values()
            .map(|v| v.to_string().chars().count())
            .max()
            .unwrap_or(0);
        self.render_ascii_with(key_width, value_width)
    }

    /// Like [`LlrbTree::render_ascii`] with fixed minimum widths for keys and
    /// values.
    pub fn render_ascii_with(&self, key_width: usize, value_width: usize) -> String {
        let Some(root) = self.root.as_deref() else {
            return String::new();
        };
        let mut canvas = Canvas {
            rows: vec![Vec::new(); self.height() + 1],
            cell_width: key_width + value_width + 4,
            key_width,
            value_width,
        };
        if let Some(span) = canvas.draw(&self.root, 0, 1) {
            canvas.put(0, span.anchor, Canvas::marker(root.color));
        }
        canvas
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
