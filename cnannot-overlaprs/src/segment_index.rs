//! Genome-wide copy-number segment index.
//!
//! [`SegmentIndex`] keeps one [`Overlapper`] per chromosome and answers point
//! queries against it. Each interval carries the ordinal of its segment in the
//! original table, which is how the "first matching segment in input order
//! wins" rule survives backends that reorder intervals.

use fxhash::FxHashMap as HashMap;
use log::debug;

use cnannot_core::consts::Y_CHROMOSOME;
use cnannot_core::models::{Interval, Segment};

use crate::{Bits, Linear, Overlapper, OverlapperType};

/// A read-only index over a sample's copy-number segments.
///
/// The index is built once and never mutated, so it can be shared across
/// threads while loci are annotated.
pub struct SegmentIndex {
    /// Segments in original input order; interval values index into this.
    segments: Vec<Segment>,
    index_maps: HashMap<String, Box<dyn Overlapper<u64, usize>>>,
    overlapper_type: OverlapperType,
    has_y: bool,
}

impl SegmentIndex {
    ///
    /// Build the index from the full segment table.
    ///
    /// # Arguments
    /// - segments: segments in the order they appear in the input
    /// - overlapper_type: backend used for every chromosome
    ///
    pub fn build(segments: Vec<Segment>, overlapper_type: OverlapperType) -> Self {
        let mut intervals: HashMap<String, Vec<Interval<u64, usize>>> = HashMap::default();

        // STEP 1: organize segments into vectors, one for each chrom
        for (ordinal, segment) in segments.iter().enumerate() {
            intervals
                .entry(segment.chromosome.clone())
                .or_default()
                .push(segment.to_interval(ordinal));
        }

        // STEP 2: take each vector (one for each chrom) and build the overlapper
        let mut index_maps: HashMap<String, Box<dyn Overlapper<u64, usize>>> = HashMap::default();
        index_maps.reserve(intervals.len());
        for (chr, chr_intervals) in intervals.into_iter() {
            let lapper: Box<dyn Overlapper<u64, usize>> = match overlapper_type {
                OverlapperType::Bits => Box::new(Bits::build(chr_intervals)),
                OverlapperType::Linear => Box::new(Linear::build(chr_intervals)),
            };
            index_maps.insert(chr, lapper);
        }

        let has_y = segments.iter().any(|s| s.chromosome == Y_CHROMOSOME);

        debug!(
            "Indexed {} segments on {} chromosomes ({} backend, Y segment present: {})",
            segments.len(),
            index_maps.len(),
            overlapper_type,
            has_y
        );

        SegmentIndex {
            segments,
            index_maps,
            overlapper_type,
            has_y,
        }
    }

    /// Ordinals of every segment containing the position, ascending.
    fn matching_ordinals(&self, chromosome: &str, position: u64) -> Vec<usize> {
        let mut ordinals: Vec<usize> = match self.index_maps.get(chromosome) {
            Some(lapper) => lapper.find_point_iter(position).map(|iv| iv.val).collect(),
            None => Vec::new(),
        };
        ordinals.sort_unstable();
        ordinals
    }

    ///
    /// Every segment on `chromosome` with `start <= position <= end`, in input
    /// order. An empty vector means no segment contains the locus.
    ///
    pub fn find_containing(&self, chromosome: &str, position: u64) -> Vec<&Segment> {
        self.matching_ordinals(chromosome, position)
            .into_iter()
            .map(|ordinal| &self.segments[ordinal])
            .collect()
    }

    ///
    /// The authoritative segment for a locus: the first containing segment in
    /// input order, or `None` when there is none.
    ///
    pub fn find_first(&self, chromosome: &str, position: u64) -> Option<&Segment> {
        self.index_maps
            .get(chromosome)?
            .find_point_iter(position)
            .map(|iv| iv.val)
            .min()
            .map(|ordinal| &self.segments[ordinal])
    }

    /// True iff any segment in the whole table lies on chromosome `Y`.
    pub fn has_y_segment(&self) -> bool {
        self.has_y
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn overlapper_type(&self) -> OverlapperType {
        self.overlapper_type
    }

    /// Segments in input order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Indexed chromosome names, sorted
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut chrs: Vec<&str> = self.index_maps.keys().map(String::as_str).collect();
        chrs.sort_unstable();
        chrs
    }

    ///
    /// Number of unordered pairs of segments on the same chromosome that share
    /// at least one position. Only reported; overlapping calls are never merged.
    ///
    pub fn overlapping_pairs(&self) -> usize {
        let mut hits = 0;
        for segment in &self.segments {
            if let Some(lapper) = self.index_maps.get(&segment.chromosome) {
                // every segment overlaps itself
                hits += lapper
                    .find_iter(segment.start, segment.end)
                    .count()
                    .saturating_sub(1);
            }
        }
        hits / 2
    }
}

/// A trait for converting a segment table into a [`SegmentIndex`].
pub trait IntoSegmentIndex {
    fn into_segment_index(self, overlapper_type: OverlapperType) -> SegmentIndex;
}

impl IntoSegmentIndex for Vec<Segment> {
    fn into_segment_index(self, overlapper_type: OverlapperType) -> SegmentIndex {
        SegmentIndex::build(self, overlapper_type)
    }
}
