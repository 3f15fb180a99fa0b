use common::services::{ServiceBit, ServiceMask, ServiceType};
use common::shapes::*;
use common::Place;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_edges() {
    let rect = Rectangle::new(2, 3, 4, 6);
    assert_eq!(rect.width(), 4);
    assert_eq!(rect.height(), 6);
    assert_eq!(rect.left(), 2);
    assert_eq!(rect.right(), 6);
    assert_eq!(rect.top(), 3);
    assert_eq!(rect.bottom(), 9);
    assert_eq!(rect.area(), 24);
    assert_eq!(rect.center(), (4, 6));
}

#[test]
fn test_contains_point_is_half_open() {
    let rect = Rectangle::new(0, 0, 10, 10);
    assert!(rect.contains_point(0, 0));
    assert!(rect.contains_point(9, 9));
    assert!(!rect.contains_point(10, 5));
    assert!(!rect.contains_point(5, 10));
    assert!(!rect.contains_point(-1, 5));
}

#[test]
fn test_empty_rectangle_contains_nothing() {
    let rect = Rectangle::new(5, 5, 0, 10);
    assert!(rect.is_empty());
    assert!(!rect.contains_point(5, 5));
    assert!(!rect.intersects(&Rectangle::new(0, 0, 100, 100)));
}

#[test]
fn test_contains_point_near_i32_edge() {
    let rect = Rectangle::new(i32::MAX - 1, i32::MAX - 1, 10, 10);
    assert!(rect.contains_point(i32::MAX, i32::MAX));
    assert_eq!(rect.right(), i32::MAX as i64 + 9);
}

#[test]
fn test_intersects() {
    let rect = Rectangle::new(0, 0, 10, 10);
    assert!(rect.intersects(&Rectangle::new(5, 5, 10, 10)));
    assert!(rect.intersects(&Rectangle::new(-5, -5, 6, 6)));
    // Shared edges do not overlap on half-open boxes.
    assert!(!rect.intersects(&Rectangle::new(10, 0, 10, 10)));
    assert!(!rect.intersects(&Rectangle::new(0, 10, 10, 10)));
    assert!(!rect.intersects(&Rectangle::new(20, 20, 5, 5)));
}

#[test]
fn test_contains_rect() {
    let rect = Rectangle::new(0, 0, 10, 10);
    assert!(rect.contains_rect(&Rectangle::new(2, 2, 8, 8)));
    assert!(!rect.contains_rect(&Rectangle::new(2, 2, 9, 8)));
}

#[test]
fn test_expand_to_include() {
    let mut rect = Rectangle::new(2, 3, 4, 6);
    let other_rect = Rectangle::new(6, 5, 4, 2);
    rect.expand_to_include(&other_rect);
    assert_eq!(rect, Rectangle::new(2, 3, 8, 6));

    let mut rect = Rectangle::new(0, 0, 1, 1);
    rect.expand_to_include(&Rectangle::new(-4, 7, 2, 2));
    assert_eq!(rect, Rectangle::new(-4, 0, 5, 9));
}

#[test]
fn test_around_is_closed_square() {
    let rect = Rectangle::around(0, 0, 50.0);
    assert_eq!(rect, Rectangle::new(-50, -50, 101, 101));
    assert!(rect.contains_point(50, 0));
    assert!(rect.contains_point(-50, -50));
    assert!(!rect.contains_point(51, 0));

    let rect = Rectangle::around(3, 3, 1.9);
    assert_eq!(rect, Rectangle::new(2, 2, 3, 3));
}

#[test]
fn test_around_rejects_bad_radius_and_clamps() {
    assert!(Rectangle::around(0, 0, -1.0).is_empty());
    assert!(Rectangle::around(0, 0, f64::NAN).is_empty());

    let rect = Rectangle::around(0, 0, f64::INFINITY);
    assert_eq!(rect.x, i32::MIN);
    assert!(rect.contains_point(i32::MAX - 1, i32::MIN));
}

#[test]
fn test_circle_contains_point() {
    let circle = Circle::new(0, 0, 5.0);
    assert!(circle.contains_point(3, 4));
    assert!(circle.contains_point(5, 0));
    assert!(!circle.contains_point(4, 4));
    assert!(!Circle::new(0, 0, -1.0).contains_point(0, 0));
    assert_eq!(circle.bounding_box(), Rectangle::new(-5, -5, 11, 11));
}

#[test]
fn test_within_distance_is_exact() {
    assert!(within_distance(0, 0.0));
    assert!(within_distance(1, 1.0));
    assert!(!within_distance(2, 1.4142));
    assert!(within_distance(2, 1.5));
    assert!(!within_distance(1, 0.5));
    assert!(!within_distance(0, -0.5));
    assert!(!within_distance(0, f64::NAN));
    assert!(within_distance(u128::MAX, f64::INFINITY));

    // Past 2^53 the f64 square root rounds 1e16 + 1 down to exactly 1e8.
    let far = distance_sq(0, 0, 100_000_000, 1);
    assert!(!within_distance(far, 1e8));
    assert!(within_distance(far, 100_000_000.5));
    assert!(within_distance(distance_sq(0, 0, 100_000_000, 0), 1e8));

    let circle = Circle::new(0, 0, 1e8);
    assert!(!circle.contains_point(100_000_000, 1));
    assert!(circle.contains_point(0, -100_000_000));
}

#[test]
fn test_around_within_keeps_far_edge() {
    let clip = Rectangle::new(0, 0, 1 << 31, 16);
    let rect = Rectangle::around_within(0, 0, f64::INFINITY, &clip);
    assert_eq!(rect, clip);
    assert!(rect.contains_point(i32::MAX, 15));

    let rect = Rectangle::around_within(10, 10, 3.0, &clip);
    assert_eq!(rect, Rectangle::new(7, 7, 7, 7));
    let rect = Rectangle::around_within(0, 0, 3.0, &clip);
    assert_eq!(rect, Rectangle::new(0, 0, 4, 4));
    assert!(Rectangle::around_within(0, 0, -1.0, &clip).is_empty());

    let circle = Circle::new(i32::MAX, 0, 0.0);
    assert!(circle.bounding_box_within(&clip).contains_point(i32::MAX, 0));
}

#[test]
fn test_distance_sq_full_range() {
    assert_eq!(distance_sq(0, 0, 3, 4), 25);
    let span = (i32::MAX as i64 - i32::MIN as i64) as u128;
    assert_eq!(distance_sq(i32::MIN, i32::MIN, i32::MAX, i32::MAX), span * span * 2);
}

#[test]
fn test_random_point_inside() {
    let rect = Rectangle::new(-20, 30, 7, 3);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let (x, y) = rect.random_point_inside(&mut rng).unwrap();
        assert!(rect.contains_point(x, y));
    }
    assert!(Rectangle::new(0, 0, 0, 3)
        .random_point_inside(&mut rng)
        .is_none());
}

#[test]
fn test_service_mask_operations() {
    let mut mask = ServiceMask::of(ServiceType::Cafe);
    assert!(mask.contains(ServiceType::Cafe));
    assert!(!mask.contains(ServiceType::Bank));

    mask.insert(ServiceType::Bank);
    mask.insert(ServiceType::Bank);
    assert_eq!(mask.len(), 2);

    mask.remove(ServiceType::Cafe);
    assert!(!mask.contains(ServiceType::Cafe));
    assert!(mask.contains(ServiceType::Bank));

    let both: ServiceMask = [ServiceType::Cafe, ServiceType::Bank].into_iter().collect();
    assert!(both.contains_all(mask));
    assert!(!mask.contains_all(both));
    assert!(mask.contains_all(ServiceMask::empty()));
    assert_eq!(mask.union(ServiceMask::of(ServiceType::Cafe)), both);
}

#[test]
fn test_service_bit_bounds() {
    assert!(ServiceBit::new(63).is_some());
    assert!(ServiceBit::new(64).is_none());

    let high = ServiceBit::new(63).unwrap();
    let mask = ServiceMask::of(high);
    assert_eq!(mask.bits(), 1 << 63);
    let bits: Vec<u32> = ServiceMask::from_bits(0b1010_0001).iter().map(|b| b.index()).collect();
    assert_eq!(bits, vec![0, 5, 7]);
}

#[test]
fn test_service_type_bits_follow_declaration_order() {
    for (i, service) in ServiceType::ALL.iter().enumerate() {
        assert_eq!(ServiceMask::of(*service).bits(), 1 << i);
    }
}

#[test]
fn test_place_identity_is_coordinates() {
    let a = Place::with_services(1, 2, ServiceMask::of(ServiceType::Cafe));
    let b = Place::with_services(1, 2, ServiceMask::of(ServiceType::Bank));
    assert_eq!(a, b);
    assert!(Place::new(1, 2) < Place::new(1, 3));
    assert!(Place::new(1, 9) < Place::new(2, 0));

    let mut place = Place::new(4, 4);
    place.add_service(ServiceType::Gym);
    assert!(place.offers(ServiceType::Gym));
    place.remove_service(ServiceType::Gym);
    assert!(place.services.is_empty());
}
