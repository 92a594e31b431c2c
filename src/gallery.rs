use arrayvec::ArrayVec;
use rand::Rng;

pub const ROW_SIZE: usize = 3;

/// One horizontal strip of the gallery.
pub type RowGroup<T> = ArrayVec<T, ROW_SIZE>;

/// Random permutation by decorate-sort-undecorate: every item gets a key in `[0, 1)`
/// and the items are ordered by that key.
pub fn shuffle<T, R: Rng + ?Sized>(items: impl IntoIterator<Item = T>, rng: &mut R) -> Vec<T> {
    let mut keyed: Vec<(f64, T)> = items.into_iter().map(|i| (rng.gen::<f64>(), i)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Splits `items` into consecutive rows of `ROW_SIZE`; only the last row may be short.
pub fn chunk<T>(items: impl IntoIterator<Item = T>) -> Vec<RowGroup<T>> {
    let mut rows: Vec<RowGroup<T>> = Vec::new();
    for item in items {
        match rows.last_mut() {
            Some(row) if !row.is_full() => row.push(item),
            _ => {
                let mut row = RowGroup::new();
                row.push(item);
                rows.push(row);
            }
        }
    }
    rows
}

pub fn partition<T, R: Rng + ?Sized>(items: impl IntoIterator<Item = T>, rng: &mut R) -> Vec<RowGroup<T>> {
    chunk(shuffle(items, rng))
}
