// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

/// A pull-based supplier of text lines, without their line terminators.
pub trait LineSource {
    fn next_line(&mut self) -> Option<&str>;

    /// Starts over at the first line.
    fn rewind(&mut self);
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn next_line(&mut self) -> Option<&str> {
        (**self).next_line()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn next_line(&mut self) -> Option<&str> {
        (**self).next_line()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}
