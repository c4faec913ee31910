//! Snake body: an ordered run of segments, head first.

use std::collections::VecDeque;

use crate::types::{ColorClass, Direction, Position};

/// One occupied cell of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub pos: Position,
    /// Value of the food that produced this segment (inherited when moving).
    pub class: ColorClass,
}

impl Segment {
    pub fn new(pos: Position, class: ColorClass) -> Self {
        Self { pos, class }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Segment>,
}

impl Snake {
    /// Build a straight snake with its head at `head`, trailing away from `facing`.
    pub fn straight(head: Position, facing: Direction, len: usize, class: ColorClass) -> Self {
        let back = facing.opposite();
        let mut segments = VecDeque::with_capacity(len);
        let mut pos = head;
        for _ in 0..len {
            segments.push_back(Segment::new(pos, class));
            pos = pos.step(back);
        }
        Self { segments }
    }

    /// Build from explicit segments, head first. Returns `None` when empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Option<Self> {
        let segments: VecDeque<Segment> = segments.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    pub fn head(&self) -> Segment {
        // Non-empty by construction and never shrinks below its initial length.
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|s| s.pos == pos)
    }

    /// True when no two segments share a cell.
    pub fn is_self_disjoint(&self) -> bool {
        let mut cells: Vec<Position> = self.segments.iter().map(|s| s.pos).collect();
        cells.sort_unstable();
        cells.windows(2).all(|w| w[0] != w[1])
    }

    pub(crate) fn push_head(&mut self, seg: Segment) {
        self.segments.push_front(seg);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Segment> {
        self.segments.pop_back()
    }
}
