use crate::cell::{Cell, CellId};
use crate::grid::Grid;
use crate::queue::PriorityQueue;

/// Outcome of a [`Grid::find_path`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSummary {
    /// Whether the target was taken off the frontier.
    pub reached: bool,
    /// Number of cells whose neighbors were examined.
    pub expanded: usize,
}

/// Frontier entry: a cell handle and a copy of the cell taken when it was
/// enqueued. Costs are never revised after that, so the copy stays exact.
#[derive(Clone, Debug)]
struct NodeRef {
    id: CellId,
    cell: Cell,
}

impl Grid {
    /// Search for a shortest route from `start` to `target` (A*).
    ///
    /// All search state from earlier runs is cleared first. On return every
    /// reached cell carries its `g`/`h` costs and a parent handle pointing
    /// one step back towards `start`; use [`retrace_path`](Self::retrace_path)
    /// to read the route. An unreachable target is not an error: the
    /// frontier simply runs dry and the retrace comes back empty.
    ///
    /// A cell enters the frontier at most once and its cost is never
    /// revised afterwards, so on some island layouts the route found costs
    /// more than the cheapest one.
    ///
    /// The start cell gets `g = 0` and `h = distance(start, target)`, so its
    /// total cost is finite like every other reached cell.
    pub fn find_path(&mut self, start: CellId, target: CellId) -> SearchSummary {
        self.reset_search();

        let mut unvisited = vec![true; self.cells.len()];
        unvisited[start.0] = false;

        let h = self.distance(start, target);
        let origin = &mut self.cells[start.0];
        origin.set_g_cost(0.0);
        origin.set_h_cost(f64::from(h));

        let mut frontier =
            PriorityQueue::new(|a: &NodeRef, b: &NodeRef| a.cell.has_priority_over(&b.cell));
        frontier.add(NodeRef {
            id: start,
            cell: origin.clone(),
        });

        let mut nbuf = Vec::with_capacity(8);
        let mut expanded = 0;

        let reached = loop {
            let Ok(current) = frontier.remove() else {
                break false;
            };
            if current.id == target {
                break true;
            }
            expanded += 1;

            let current_g = self.cells[current.id.0].g_cost();
            self.neighbors_into(current.id, &mut nbuf);

            for &next in &nbuf {
                if !unvisited[next.0] {
                    continue;
                }
                unvisited[next.0] = false;

                let step = self.distance(current.id, next);
                let estimate = self.distance(next, target);
                let cell = &mut self.cells[next.0];
                cell.set_g_cost(current_g + f64::from(step));
                cell.set_h_cost(f64::from(estimate));
                cell.set_parent(Some(current.id));
                frontier.add(NodeRef {
                    id: next,
                    cell: cell.clone(),
                });
            }
        };

        log::debug!(
            "search {} -> {}: {} after expanding {expanded} cells",
            self.cell(start).pos(),
            self.cell(target).pos(),
            if reached { "reached" } else { "exhausted" },
        );
        SearchSummary { reached, expanded }
    }

    /// Rebuild the route found by the last [`find_path`](Self::find_path).
    ///
    /// Follows parent handles back from `target`. If `start` is reached,
    /// returns the cells from `start` to `target` and flags each one as
    /// being on the path; otherwise returns an empty vector and flags
    /// nothing. `start == target` yields that single cell.
    pub fn retrace_path(&mut self, start: CellId, target: CellId) -> Vec<CellId> {
        let mut path = vec![target];
        if start != target {
            let mut current = target;
            let found = loop {
                // A chain longer than the map can only be a cycle.
                if path.len() > self.cells.len() {
                    break false;
                }
                match self.cells[current.0].parent() {
                    None => break false,
                    Some(parent) => {
                        path.push(parent);
                        if parent == start {
                            break true;
                        }
                        current = parent;
                    }
                }
            };
            if !found {
                return Vec::new();
            }
            path.reverse();
        }
        for id in &path {
            self.cells[id.0].set_in_path(true);
        }
        path
    }

    /// Search, retrace, and render the map with the route drawn as `*`.
    ///
    /// The boat and treasure keep their `B`/`T` symbols. When no route
    /// exists the map is rendered without any `*`.
    pub fn plot_path(&mut self, start: CellId, target: CellId) -> String {
        self.find_path(start, target);
        let path = self.retrace_path(start, target);
        let mut on_path = vec![false; self.cells.len()];
        for id in &path {
            on_path[id.0] = true;
        }
        let mut out = String::with_capacity(self.cells.len() + self.height());
        // Writing into a String cannot fail.
        let _ = self.render(&mut out, |id| on_path[id.0]);
        out
    }

    /// Sum of step distances along `path`.
    pub fn path_cost(&self, path: &[CellId]) -> u32 {
        path.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }

    /// Clear costs, parents and path flags on every cell.
    pub fn reset_search(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn summary_round_trip() {
        let summary = SearchSummary {
            reached: true,
            expanded: 12,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: SearchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
