pub(crate) use super::*;

#[test]
fn test_from_slice() {
    let v = Vector::<f64>::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!((v[0] - 1.0).abs() < 1e-12);
    assert!((v[2] - 3.0).abs() < 1e-12);
}

#[test]
fn test_from_vec() {
    let v = Vector::from_vec(vec![4.0, 5.0]);
    assert_eq!(v.as_slice(), &[4.0, 5.0]);
}

#[test]
fn test_zeros() {
    let v = Vector::<f64>::zeros(4);
    assert_eq!(v.len(), 4);
    assert!(v.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_is_empty() {
    let v = Vector::<f64>::from_vec(Vec::new());
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_dot() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    assert!((a.dot(&b) - 32.0).abs() < 1e-12);
}

#[test]
fn test_dot_is_commutative() {
    let a = Vector::from_slice(&[0.5, -1.5, 2.0]);
    let b = Vector::from_slice(&[3.0, 0.25, -2.0]);
    assert!((a.dot(&b) - b.dot(&a)).abs() < 1e-12);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[3.0, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_norm_of_zero_vector() {
    let v = Vector::<f64>::zeros(3);
    assert_eq!(v.norm(), 0.0);
}

#[test]
fn test_sum() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.5]);
    assert!((v.sum() - 6.5).abs() < 1e-12);
}
