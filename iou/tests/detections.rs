use approx::assert_abs_diff_eq;
use bbox::{box_union_area, intersection, BoundingBox, IntegerBox};
use iou::{make_iou, IoU, IoUExt};

#[test]
fn score_matches_geometry() {
    let truth = IntegerBox::new(10, 110, 10, 110);
    let predictions = [
        IntegerBox::new(10, 110, 10, 110),
        IntegerBox::new(60, 160, 10, 110),
        IntegerBox::new(35, 85, 35, 85),
        IntegerBox::new(200, 300, 200, 300),
    ];

    for prediction in &predictions {
        let inter = bbox::area(&intersection(&truth, prediction)) as f32;
        let union = box_union_area(&truth, prediction) as f32;
        assert_eq!(make_iou(&truth, prediction), IoU::new(inter / union));
        assert_eq!(truth.iou_with(prediction), make_iou(prediction, &truth));
    }
}

#[test]
fn average_and_threshold() {
    let truth = IntegerBox::new(0, 100, 0, 100);
    let scores: Vec<IoU> = [
        IntegerBox::new(0, 100, 0, 100),
        IntegerBox::new(50, 150, 0, 100),
        IntegerBox::new(0, 50, 0, 50),
        IntegerBox::new(150, 250, 0, 100),
    ]
    .iter()
    .map(|prediction| make_iou(&truth, prediction))
    .collect();

    let threshold = IoU::new(0.25);
    let hits = scores.iter().filter(|&&score| score >= threshold).count();
    assert_eq!(hits, 3);

    let mean = scores.iter().copied().sum::<IoU>() / scores.len() as f32;
    let expect = (1.0 + 1.0 / 3.0 + 0.25 + 0.0) / 4.0;
    assert_abs_diff_eq!(mean.value(), expect, epsilon = 1e-6);
}

#[test]
fn float_and_integer_boxes_agree() {
    let a = IntegerBox::new(0, 40, 0, 30);
    let b = IntegerBox::new(20, 60, 10, 50);
    let af: BoundingBox<f64> = a.cast();
    let bf: BoundingBox<f64> = b.cast();
    assert_eq!(make_iou(&a, &b), make_iou(&af, &bf));
}

#[cfg(feature = "serde")]
#[test]
fn serde_is_transparent() {
    let score: IoU = serde_json::from_str("0.5").unwrap();
    assert_eq!(score, IoU::new(0.5));
    assert_eq!(serde_json::to_string(&IoU::new(4.5)).unwrap(), "4.5");
}
