use crate::console::MessageSink;
use crate::error::{normalize_tag, PatternError};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::str::FromStr;

pub trait SortStrategy {
    /// Label announced before the algorithm runs.
    fn name(&self) -> &'static str;

    /// Sorts `items` ascending, in place.
    fn sort(&self, items: &mut [i32]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, items: &mut [i32]) {
        let mut unsorted = items.len();
        while unsorted > 1 {
            let mut last_swap = 0;
            for i in 1..unsorted {
                if items[i - 1] > items[i] {
                    items.swap(i - 1, i);
                    last_swap = i;
                }
            }
            // Everything past the last swap is already in place.
            unsorted = last_swap;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Median of the first, middle and last elements.
    fn choose_pivot(items: &[i32]) -> i32 {
        let a = items[0];
        let b = items[items.len() / 2];
        let c = items[items.len() - 1];
        a.max(b).min(a.min(b).max(c))
    }

    /// Three-way partition. Returns `(lt, gt)` such that `items[..lt]` is
    /// below the pivot, `items[lt..gt]` equals it and `items[gt..]` is above.
    fn partition(items: &mut [i32]) -> (usize, usize) {
        let pivot = Self::choose_pivot(items);
        let (mut lt, mut i, mut gt) = (0, 0, items.len());
        while i < gt {
            match items[i].cmp(&pivot) {
                Ordering::Less => {
                    items.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    items.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }
        (lt, gt)
    }

    /// Recurses into the smaller side only, so depth stays O(log n).
    fn quicksort(mut items: &mut [i32]) {
        while items.len() > 1 {
            let (lt, gt) = Self::partition(items);
            let (left, rest) = mem::take(&mut items).split_at_mut(lt);
            let right = &mut rest[gt - lt..];
            if left.len() < right.len() {
                Self::quicksort(left);
                items = right;
            } else {
                Self::quicksort(right);
                items = left;
            }
        }
    }
}

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort(&self, items: &mut [i32]) {
        Self::quicksort(items);
    }
}

/// Closed set of sorting strategies, selectable by name from a demo script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SortKind {
    Bubble,
    Quick,
}

impl SortKind {
    pub fn into_strategy(self) -> Box<dyn SortStrategy> {
        match self {
            SortKind::Bubble => Box::new(BubbleSort),
            SortKind::Quick => Box::new(QuickSort),
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKind::Bubble => write!(f, "bubble"),
            SortKind::Quick => write!(f, "quick"),
        }
    }
}

impl FromStr for SortKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "bubble" | "bubblesort" => Ok(SortKind::Bubble),
            "quick" | "quicksort" => Ok(SortKind::Quick),
            _ => Err(PatternError::unknown_strategy("sort", s)),
        }
    }
}

impl TryFrom<String> for SortKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Context that sorts with whichever strategy is currently bound.
pub struct Sorter<S: MessageSink> {
    strategy: Box<dyn SortStrategy>,
    sink: S,
}

impl<S: MessageSink> Sorter<S> {
    pub fn new(strategy: Box<dyn SortStrategy>, sink: S) -> Self {
        tracing::debug!(strategy = strategy.name(), "sort strategy bound");
        Self { strategy, sink }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        tracing::debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "sort strategy replaced"
        );
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Announces the active strategy, then sorts with it. Returns the label
    /// of the strategy that ran.
    pub fn sort(&mut self, items: &mut [i32]) -> &'static str {
        let name = self.strategy.name();
        self.sink.emit(name);
        self.strategy.sort(items);
        name
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
