//! Built-in explanation bank.
//!
//! One entry per algorithm, written for an interview-prep audience: the
//! core idea, complexities, and a hook for remembering how it works. Each
//! entry renders to short Markdown via [`Explanation::to_text`].

use super::Algorithm;
use crate::search::SearchAlgorithm;
use crate::sorting::SortAlgorithm;

/// An algorithm write-up, split into the sections the info panel shows.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Core concept and intuition, 2-3 sentences.
    pub summary: &'static str,
    /// Time complexity, best/average/worst bullets.
    pub time_complexity: &'static str,
    /// Space complexity with a word on what the space holds.
    pub space_complexity: &'static str,
    /// A short hook for remembering how the algorithm works.
    pub tip: &'static str,
}

impl Explanation {
    /// Render as Markdown under the given title.
    pub fn to_text(&self, title: &str) -> String {
        format!(
            "# {title}\n\n{}\n\n## Time Complexity\n{}\n\n## Space Complexity\n{}\n\n## Remember it\n{}\n",
            self.summary, self.time_complexity, self.space_complexity, self.tip
        )
    }
}

// =============================================================================
// SORTING
// =============================================================================

/// Explanation for bubble sort.
pub const BUBBLE_SORT_EXPLANATION: Explanation = Explanation {
    summary: "Walk the array again and again, comparing each pair of \
neighbors and swapping them when they are out of order. After each pass the \
largest remaining value has bubbled to its final position at the end, so the \
unsorted region shrinks by one.",
    time_complexity: "- Best: O(n) with an early exit when a pass makes no swaps\n\
- Average: O(n^2)\n\
- Worst: O(n^2), reverse-sorted input",
    space_complexity: "O(1). Everything happens in place; only the two \
indices being compared are extra state.",
    tip: "Picture the largest value as a bubble rising to the surface: one \
full pass carries it all the way to the end, and the sorted tail grows \
from the right.",
};

/// Explanation for quick sort.
pub const QUICK_SORT_EXPLANATION: Explanation = Explanation {
    summary: "Pick a pivot, then partition: everything smaller ends up on \
its left, everything larger on its right, which drops the pivot into its \
final position. Recurse on the two sides. All the work happens during \
partitioning; nothing needs merging afterwards.",
    time_complexity: "- Best: O(n log n), balanced partitions\n\
- Average: O(n log n)\n\
- Worst: O(n^2), e.g. sorted input with a first-element pivot",
    space_complexity: "O(log n) expected recursion stack when the smaller \
partition is recursed first; the partitioning itself is in place.",
    tip: "One partition pass finds the pivot's forever home. Everything \
else is just doing the same thing to the two neighborhoods around it.",
};

/// Explanation for merge sort.
pub const MERGE_SORT_EXPLANATION: Explanation = Explanation {
    summary: "Split the array in half until single elements remain, then \
merge sorted halves by repeatedly taking the smaller head. Ties take the \
left head, which keeps equal elements in their original order: merge sort \
is stable.",
    time_complexity: "- Best: O(n log n)\n\
- Average: O(n log n)\n\
- Worst: O(n log n); the split depth is always log n",
    space_complexity: "O(n) for the auxiliary array the merge writes into.",
    tip: "Split down, zip up. The split is trivial; all the intelligence \
lives in the two-finger merge of sorted halves.",
};

/// Explanation for heap sort.
pub const HEAP_SORT_EXPLANATION: Explanation = Explanation {
    summary: "Reshape the array into a max-heap, so the largest value sits \
at index 0. Then repeatedly swap the root with the last unsorted slot and \
sift the new root down to restore the heap. The sorted region grows from \
the right while the heap shrinks.",
    time_complexity: "- Best: O(n log n)\n\
- Average: O(n log n)\n\
- Worst: O(n log n); building the heap alone is O(n)",
    space_complexity: "O(1). The heap lives inside the array itself: \
children of index i sit at 2i+1 and 2i+2.",
    tip: "The array is the tree. No pointers anywhere: parent and child \
positions are pure index arithmetic.",
};

// =============================================================================
// PATHFINDING
// =============================================================================

/// Explanation for Dijkstra's algorithm.
pub const DIJKSTRA_EXPLANATION: Explanation = Explanation {
    summary: "Always expand the unvisited node with the smallest distance \
from the start, then relax its neighbors: a neighbor's distance becomes the \
current distance plus the connecting edge. Once a node is expanded its \
distance is final, so the first time the target is expanded you have the \
shortest path.",
    time_complexity: "- With a binary heap: O((V + E) log V)\n\
- With a linear scan of the unvisited set: O(V^2)\n\
- Either way every edge is relaxed at most once per endpoint",
    space_complexity: "O(V) for distances, back-pointers, and the \
unvisited set.",
    tip: "BFS with a price tag: instead of hop count, the queue is ordered \
by accumulated cost, and the cheapest frontier node always goes next.",
};

/// Explanation for breadth-first search.
pub const BFS_EXPLANATION: Explanation = Explanation {
    summary: "Explore outward in rings: visit every node one step away, \
then every node two steps away, and so on, by pushing discovered neighbors \
onto the back of a queue. On an unweighted graph the first time you reach a \
node is via a shortest path.",
    time_complexity: "- Best: O(V + E)\n\
- Average: O(V + E)\n\
- Worst: O(V + E); every node and edge is handled once",
    space_complexity: "O(V) for the queue and the visited markers; the \
frontier can hold a whole ring of the graph.",
    tip: "The queue is fair: first discovered, first expanded. That \
fairness is exactly what makes the first arrival the shortest one.",
};

/// Explanation for depth-first search.
pub const DFS_EXPLANATION: Explanation = Explanation {
    summary: "Commit to one direction and keep walking until you hit a dead \
end, then backtrack to the last junction with an untried option. A stack \
(or recursion) remembers the junctions. DFS finds a path, not necessarily \
a short one.",
    time_complexity: "- Best: O(V + E)\n\
- Average: O(V + E)\n\
- Worst: O(V + E), though the path it returns can be far from shortest",
    space_complexity: "O(V) for the stack in the worst case, e.g. one long \
corridor.",
    tip: "The stack is stubborn: the newest discovery always wins, so the \
search dives before it widens. Swap the stack for a queue and you get BFS.",
};

/// Explanation for A* search.
pub const ASTAR_EXPLANATION: Explanation = Explanation {
    summary: "Dijkstra with a sense of direction: rank frontier nodes by \
f = g + h, the cost already paid plus a heuristic guess of the cost \
remaining. With an admissible heuristic (never overestimating, like \
Manhattan distance on a grid) the target is still reached by a shortest \
path, but far fewer nodes get expanded.",
    time_complexity: "- Depends on the heuristic: O(E) range behavior with \
a perfect one\n\
- Degenerates to Dijkstra's cost when h = 0\n\
- Worst: exponential with a misleading heuristic",
    space_complexity: "O(V) for the open list, scores, and back-pointers.",
    tip: "g is the road behind, h is the guess ahead. A* just refuses to \
extend a path whose total estimate already looks worse than another's.",
};

// =============================================================================
// HASHING
// =============================================================================

/// Explanation for linear-probing hash tables.
pub const LINEAR_PROBING_EXPLANATION: Explanation = Explanation {
    summary: "Hash the key to a home slot (key mod table size). If that \
slot is taken by another key, step to the next slot, wrapping at the end, \
until an empty slot or the key itself appears. Searching walks the same \
trail and can stop at the first empty slot: the key could never have been \
placed beyond it.",
    time_complexity: "- Best: O(1), empty home slot\n\
- Average: O(1) while the table stays sparse\n\
- Worst: O(n) when clustering chains most of the table together",
    space_complexity: "O(n) for the fixed slot array; no pointers or \
buckets beyond it.",
    tip: "Like finding a seat in a full row: start at your ticket's seat \
and shuffle right until a free one. Deletions need care (tombstones), \
because an empty seat ends every later search.",
};

// =============================================================================
// LOOKUP
// =============================================================================

/// Get the built-in explanation for an algorithm.
pub fn for_algorithm(algorithm: Algorithm) -> &'static Explanation {
    match algorithm {
        Algorithm::Sort(SortAlgorithm::Bubble) => &BUBBLE_SORT_EXPLANATION,
        Algorithm::Sort(SortAlgorithm::Quick) => &QUICK_SORT_EXPLANATION,
        Algorithm::Sort(SortAlgorithm::Merge) => &MERGE_SORT_EXPLANATION,
        Algorithm::Sort(SortAlgorithm::Heap) => &HEAP_SORT_EXPLANATION,
        Algorithm::Search(SearchAlgorithm::Dijkstra) => &DIJKSTRA_EXPLANATION,
        Algorithm::Search(SearchAlgorithm::Bfs) => &BFS_EXPLANATION,
        Algorithm::Search(SearchAlgorithm::Dfs) => &DFS_EXPLANATION,
        Algorithm::Search(SearchAlgorithm::AStar) => &ASTAR_EXPLANATION,
        Algorithm::LinearProbing => &LINEAR_PROBING_EXPLANATION,
    }
}
