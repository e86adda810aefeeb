use crate::consts::MUTATION_ID_SEPARATOR;

///
/// A candidate point mutation together with the allele depths of the
/// designated sample.
///
/// Read counts are optional: a genotype without an `AD` value still yields a
/// locus, which is later dropped from the final table.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct VariantLocus {
    pub chromosome: String,
    pub position: u64,
    pub ref_count: Option<u32>,
    pub var_count: Option<u32>,
}

impl VariantLocus {
    pub fn new(
        chromosome: String,
        position: u64,
        ref_count: Option<u32>,
        var_count: Option<u32>,
    ) -> Self {
        VariantLocus {
            chromosome,
            position,
            ref_count,
            var_count,
        }
    }

    /// `chromosome:position`, the PyClone mutation identifier
    pub fn mutation_id(&self) -> String {
        format!("{}{}{}", self.chromosome, MUTATION_ID_SEPARATOR, self.position)
    }

    /// Both allele depths are known
    pub fn has_read_counts(&self) -> bool {
        self.ref_count.is_some() && self.var_count.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_mutation_id() {
        let locus = VariantLocus::new("X".to_string(), 155_000_000, Some(1), Some(2));
        assert_eq!(locus.mutation_id(), "X:155000000");
    }

    #[rstest]
    #[case(Some(1), Some(2), true)]
    #[case(None, Some(2), false)]
    #[case(Some(1), None, false)]
    fn test_has_read_counts(
        #[case] ref_count: Option<u32>,
        #[case] var_count: Option<u32>,
        #[case] expected: bool,
    ) {
        let locus = VariantLocus::new("1".to_string(), 1, ref_count, var_count);
        assert_eq!(locus.has_read_counts(), expected);
    }
}
