// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;

/// One row of the source panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number, `None` for padding rows.
    pub number: Option<u64>,
    pub text: String,
    pub highlighted: bool,
}

impl SourceLine {
    fn padding() -> Self {
        Self { number: None, text: String::new(), highlighted: false }
    }
}

/// Scrollable, clamped range of lines around the selected source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWindow {
    file_path: String,
    text: String,
    line_starts: Vec<usize>,
    center_line: usize,
    half_height: usize,
    target_line: u64,
}

impl SourceWindow {
    pub fn new(half_height: usize) -> Self {
        Self {
            file_path: String::new(),
            text: String::new(),
            line_starts: vec![0],
            center_line: 0,
            half_height,
            target_line: 0,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn center_line(&self) -> usize {
        self.center_line
    }

    pub fn half_height(&self) -> usize {
        self.half_height
    }

    pub fn target_line(&self) -> u64 {
        self.target_line
    }

    /// Lines in the loaded file; an empty file still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn visible_height(&self) -> usize {
        self.half_height * 2
    }

    /// Replaces the file content and re-clamps the current position against it.
    pub fn load(&mut self, file_path: impl Into<String>, text: impl Into<String>) {
        self.file_path = file_path.into();
        self.text = text.into();
        self.line_starts.clear();
        self.line_starts.push(0);
        self.line_starts.extend(memchr::memchr_iter(b'\n', self.text.as_bytes()).map(|i| i + 1));
        self.center_line = self.clamp(self.center_line as i64);
    }

    pub fn retarget(&mut self, line: u64) {
        self.target_line = line;
        let wanted = i64::try_from(line).unwrap_or(i64::MAX) - self.half_height as i64;
        self.center_line = self.clamp(wanted);
    }

    /// Local adjustment only; the selection does not move.
    pub fn scroll(&mut self, delta_lines: i64) {
        self.center_line = self.clamp((self.center_line as i64).saturating_add(delta_lines));
    }

    /// `[max(0, center), min(line_count - 1, center + 2 * half_height))`.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.center_line;
        let end = (self.line_count() - 1).min(self.center_line + self.visible_height());
        start..end.max(start)
    }

    /// Rows to display, padded with empty rows up to the visible height.
    pub fn visible_lines(&self) -> Vec<SourceLine> {
        let mut rows = self
            .visible_range()
            .map(|idx| {
                let number = idx as u64 + 1;
                SourceLine {
                    number: Some(number),
                    text: self.line(idx).to_owned(),
                    highlighted: number == self.target_line,
                }
            })
            .collect::<Vec<_>>();
        if rows.len() < self.visible_height() {
            rows.resize_with(self.visible_height(), SourceLine::padding);
        }
        rows
    }

    pub fn line(&self, idx: usize) -> &str {
        let Some(&start) = self.line_starts.get(idx) else {
            return "";
        };
        let end = self.line_starts.get(idx + 1).map_or(self.text.len(), |next| next - 1);
        self.text[start..end].trim_end_matches('\r')
    }

    fn clamp(&self, wanted: i64) -> usize {
        let span = self.visible_height();
        let count = self.line_count();
        if count < span {
            return 0;
        }
        wanted.clamp(0, (count - span) as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::SourceWindow;
    use crate::model::fixtures::numbered_source;

    fn window(lines: usize, half_height: usize) -> SourceWindow {
        let mut window = SourceWindow::new(half_height);
        window.load("main.c", numbered_source(lines));
        window
    }

    #[rstest]
    #[case(5, 0)]
    #[case(20, 0)]
    #[case(50, 30)]
    #[case(95, 60)]
    #[case(1000, 60)]
    fn retarget_clamps_into_the_file(#[case] line: u64, #[case] center: usize) {
        let mut window = window(100, 20);
        assert_eq!(window.line_count(), 100);
        window.retarget(line);
        assert_eq!(window.center_line(), center);
    }

    #[test]
    fn short_files_pin_the_window_to_the_top() {
        let mut window = window(10, 20);
        window.retarget(8);
        assert_eq!(window.center_line(), 0);
        window.scroll(5);
        assert_eq!(window.center_line(), 0);

        let rows = window.visible_lines();
        assert_eq!(rows.len(), 40);
        assert_eq!(rows[0].number, Some(1));
        assert_eq!(rows[0].text, "line 1");
        assert!(rows[7].highlighted);
        assert_eq!(rows.iter().filter(|row| row.number.is_none()).count(), 31);
    }

    #[test]
    fn scroll_uses_the_same_clamp_and_keeps_the_target() {
        let mut window = window(100, 20);
        window.retarget(50);
        window.scroll(-100);
        assert_eq!(window.center_line(), 0);
        window.scroll(1000);
        assert_eq!(window.center_line(), 60);
        window.scroll(-5);
        assert_eq!(window.center_line(), 55);
        assert_eq!(window.target_line(), 50);
    }

    #[test]
    fn visible_range_stops_before_the_last_line() {
        let mut window = window(100, 20);
        window.retarget(95);
        assert_eq!(window.visible_range(), 60..99);
        let rows = window.visible_lines();
        assert_eq!(rows[0].text, "line 61");
        assert_eq!(rows.iter().filter(|row| row.highlighted).count(), 1);
    }

    #[test]
    fn loading_a_shorter_file_reclamps() {
        let mut window = window(100, 20);
        window.retarget(95);
        window.load("other.c", "a\r\nb\n");
        assert_eq!(window.center_line(), 0);
        assert_eq!(window.line(0), "a");
        assert_eq!(window.line(2), "");
        assert_eq!(window.line(7), "");
    }
}
