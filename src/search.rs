//! Combination search over a plate inventory.
//!
//! Every way of loading the available plates is considered, but not one by
//! one. The search folds in one distinct plate at a time, trying every usable
//! copy count, and after each plate keeps only the best selection per
//! achievable total. The tie-break is decomposable (bumper and item counts
//! add up, the heaviest plate is a max), so a best partial selection always
//! extends to a best full one and the result matches walking the whole
//! powerset. Cost grows with the number of distinct totals, not with the
//! number of subsets.

use tracing::trace;

use crate::{
    loaded_weight::{LoadedWeight, Part},
    loading_mode::LoadingMode,
    plate::Plate,
    plate_kind::PlateKind,
    weight::approx_eq,
};

/// A selection of plates, with the statistics the tie-break needs.
#[derive(Clone, Debug)]
struct Candidate {
    total: f64,
    loads: bool,
    bumpers: usize,
    items: usize,
    heaviest: f64,
    counts: Vec<usize>,
}

impl Candidate {
    fn empty(plates: usize) -> Self {
        Candidate {
            total: 0.0,
            loads: false,
            bumpers: 0,
            items: 0,
            heaviest: 0.0,
            counts: vec![0; plates],
        }
    }

    fn with(&self, index: usize, plate: &Plate, count: usize, scale: f64) -> Candidate {
        let mut next = self.clone();
        if count > 0 {
            next.total += scale * plate.weight() * count as f64;
            next.loads |= plate.kind().loads_alone();
            if plate.kind() == PlateKind::Bumper {
                next.bumpers += count;
            }
            next.items += count;
            next.heaviest = next.heaviest.max(plate.weight());
            next.counts[index] = count;
        }
        next
    }

    /// More bumpers, then fewer items, then a lighter heaviest plate.
    fn beats(&self, other: &Candidate) -> bool {
        if self.bumpers != other.bumpers {
            return self.bumpers > other.bumpers;
        }
        if self.items != other.items {
            return self.items < other.items;
        }
        self.heaviest < other.heaviest && !approx_eq(self.heaviest, other.heaviest)
    }
}

/// Every achievable total for `plates` (heaviest first) loaded in `mode`,
/// sorted ascending with one entry per distinct total.
pub(crate) fn achievable(plates: &[Plate], mode: LoadingMode) -> Vec<LoadedWeight> {
    let usable = plates
        .iter()
        .map(|plate| (plate, mode.usable(plate.count())))
        .filter(|(_, copies)| *copies > 0)
        .collect::<Vec<_>>();

    let mut selections = vec![Candidate::empty(usable.len())];
    for (index, (plate, copies)) in usable.iter().enumerate() {
        let extended = selections
            .iter()
            .flat_map(|selection| {
                (0..=*copies).map(move |count| selection.with(index, plate, count, mode.scale()))
            })
            .collect();
        selections = best_per_total(extended);
        trace!(%plate, selections = selections.len(), "folded plate into search");
    }

    selections
        .into_iter()
        .filter(|selection| selection.loads)
        .map(|selection| loaded(&usable, selection))
        .collect()
}

/// Keeps the best selection per approximate total, separately for selections
/// that can be loaded on their own and those that are magnets only so far.
///
/// Output is ordered by that split, then strictly ascending by total with
/// neighbours never approximately equal.
fn best_per_total(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // stable, so equal totals stay in the order they were found
    candidates.sort_by(|a, b| a.loads.cmp(&b.loads).then(a.total.total_cmp(&b.total)));

    let mut best: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        match best.last_mut() {
            Some(current)
                if current.loads == candidate.loads && approx_eq(current.total, candidate.total) =>
            {
                if candidate.beats(current) {
                    *current = candidate;
                }
            }
            _ => best.push(candidate),
        }
    }
    best
}

fn loaded(usable: &[(&Plate, usize)], candidate: Candidate) -> LoadedWeight {
    let parts = usable
        .iter()
        .zip(&candidate.counts)
        .flat_map(|((plate, _), count)| {
            std::iter::repeat_n(Part::new(plate.weight(), plate.kind()), *count)
        })
        .collect();
    LoadedWeight::new(candidate.total, parts)
}
