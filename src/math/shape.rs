use num_traits::One;

/// Check whether arrays with shapes `shape_a` and `shape_b` can be broadcast
/// against each other, judging by the shapes alone.
///
/// Dimensions are paired from the trailing end. A pair is compatible when
/// either size is 1 or both are equal. Only the common trailing length is
/// inspected: the shorter shape is not padded with leading 1s, so the extra
/// leading dimensions of the longer shape never affect the result.
///
/// # Arguments
///
/// * `shape_a` - The shape of the first array.
/// * `shape_b` - The shape of the second array.
///
/// # Returns
///
/// `true` if every aligned pair of dimensions is compatible. Two empty shapes,
/// or an empty shape against any other, are always compatible.
pub fn can_broadcast<T>(shape_a: &[T], shape_b: &[T]) -> bool
where
    T: PartialEq + One,
{
    let one = T::one();
    shape_a
        .iter()
        .rev()
        .zip(shape_b.iter().rev())
        .all(|(a, b)| *a == one || *b == one || a == b)
}
