use rand::Rng;

/// Row-major weight matrix: `data[n][p]` connects input `p` to neuron `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Independent uniform draws in `[0, 1)` from the supplied generator.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    /// Builds a matrix from row vectors. An empty `data` yields a 0×0 matrix.
    ///
    /// # Panics
    /// Panics if the rows are not all the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row]
    }

    /// `y[n] = Σ_p data[n][p] * x[p]`
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        if self.cols != x.len() {
            panic!("Matrices are of incorrect sizes")
        }

        self.data.iter()
            .map(|row| row.iter().zip(x).map(|(w, v)| w * v).sum())
            .collect()
    }

    /// `y[p] = Σ_n data[n][p] * e[n]`, i.e. the transpose applied to `e`.
    pub fn transpose_mul_vec(&self, e: &[f64]) -> Vec<f64> {
        if self.rows != e.len() {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = vec![0.0; self.cols];
        for (row, &err) in self.data.iter().zip(e) {
            for (acc, w) in res.iter_mut().zip(row) {
                *acc += w * err;
            }
        }

        res
    }
}
