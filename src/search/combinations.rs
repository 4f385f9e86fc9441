// src/search/combinations.rs

/// Lazy cartesian product over a list of pools.
///
/// Yields one `Vec` per combination, taking one item from each pool in pool
/// order. An empty list of pools yields a single empty combination; any
/// empty pool yields nothing.
pub struct CartesianProduct<'a, T> {
    pools: Vec<&'a [T]>,
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Iterator for CartesianProduct<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination: Vec<T> = self
            .pools
            .iter()
            .zip(&self.indices)
            .map(|(pool, &i)| pool[i].clone())
            .collect();

        // 像里程表一样从最后一位开始进位
        self.done = true;
        for position in (0..self.pools.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.pools[position].len() {
                self.done = false;
                break;
            }
            self.indices[position] = 0;
        }

        Some(combination)
    }
}

pub fn cartesian_product<'a, T: Clone>(pools: Vec<&'a [T]>) -> CartesianProduct<'a, T> {
    let done = pools.iter().any(|pool| pool.is_empty());
    let indices = vec![0; pools.len()];
    CartesianProduct {
        pools,
        indices,
        done,
    }
}

/// All `k`-element subsets of `items`, in lexicographic order of positions.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();

    loop {
        result.push(indices.iter().map(|&i| items[i]).collect());

        // 找到最右边还能右移的下标
        let Some(position) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return result;
        };
        indices[position] += 1;
        for next in position + 1..k {
            indices[next] = indices[next - 1] + 1;
        }
    }
}

/// Subsets of `items` of every size in `min_size..=max_size`, smaller first.
pub fn subsets_in_size_range<T: Copy>(
    items: &[T],
    min_size: usize,
    max_size: usize,
) -> Vec<Vec<T>> {
    (min_size..=max_size.min(items.len()))
        .flat_map(|k| combinations(items, k))
        .collect()
}
