#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn norm(&self) -> f32 {
        self.values.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Cosine similarity in `[-1, 1]`.
    ///
    /// Callers must compare embeddings of equal dimension. A zero-norm vector has no
    /// direction, so its similarity to anything is `0.0`. The same holds when any
    /// component is NaN or infinite.
    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        debug_assert_eq!(self.dimensions(), other.dimensions());

        let dot_product: f32 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum();

        let magnitude_a = self.norm();
        let magnitude_b = other.norm();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }

        let similarity = dot_product / (magnitude_a * magnitude_b);
        if similarity.is_finite() {
            similarity
        } else {
            0.0
        }
    }
}
