use super::{Gene, Genome};
use serde::{Deserialize, Serialize};

/// Read-only, 1-based view over the genomes of a population.
///
/// Index 1 is the first individual and `population_size()` the last, so a
/// valid index is always in `1..=population_size()`. Implementations may
/// panic on an index outside that range, the same way slice indexing does.
pub trait GenomePool {
    fn population_size(&self) -> usize;

    fn genome(&self, index: usize) -> &[Gene];
}

impl GenomePool for [Genome] {
    fn population_size(&self) -> usize {
        self.len()
    }

    fn genome(&self, index: usize) -> &[Gene] {
        &self[index - 1]
    }
}

impl GenomePool for Vec<Genome> {
    fn population_size(&self) -> usize {
        self.len()
    }

    fn genome(&self, index: usize) -> &[Gene] {
        &self[index - 1]
    }
}

/// One member of a population; its index is its position in the population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    pub genome: Genome,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Builds a population, numbering individuals from 1 in the given order
    pub fn from_genomes(genomes: Vec<Genome>) -> Self {
        let individuals = genomes
            .into_iter()
            .map(|genome| Individual { genome })
            .collect();

        Self { individuals }
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        index.checked_sub(1).and_then(|i| self.individuals.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

impl GenomePool for Population {
    fn population_size(&self) -> usize {
        self.individuals.len()
    }

    fn genome(&self, index: usize) -> &[Gene] {
        &self.individuals[index - 1].genome
    }
}
