use rstest::rstest;

use super::*;

fn new_page_preset() -> VisualPositioning {
    VisualPositioning {
        page_number: 0,
        measurement_units: MeasurementUnits::Centimeters,
        placement: Placement::Auto(AutoPositioning {
            container: VisualRectangle::default()
                .horizontal_stretch(1.5, 1.5)
                .vertical_stretch(1.5, 1.5),
            signature_rectangle_size: VisualSize {
                width: 7.0,
                height: 4.94,
            },
            row_spacing: 0.0,
        }),
    }
}

#[test]
fn test_manual_rectangle_keeps_anchored_offsets() {
    let request = PositioningRequest::Manual {
        page_number: 0,
        measurement_units: MeasurementUnits::Centimeters,
        rectangle: VisualRectangle::default()
            .width_left_anchored(5.0, 2.54)
            .height_bottom_anchored(3.0, 2.54),
    };

    let positioning = request.resolve(None).unwrap();

    let Placement::Manual(rectangle) = positioning.placement else {
        panic!("expected manual placement");
    };
    assert_eq!(rectangle.left, Some(2.54));
    assert_eq!(rectangle.bottom, Some(2.54));
    assert_eq!(rectangle.width, Some(5.0));
    assert_eq!(rectangle.height, Some(3.0));
    assert_eq!(rectangle.right, None);
    assert_eq!(rectangle.top, None);
}

#[test]
fn test_new_page_custom_overrides_preset() {
    let positioning = PositioningRequest::default()
        .resolve(Some(new_page_preset()))
        .unwrap();

    let Placement::Auto(auto) = positioning.placement else {
        panic!("expected auto placement");
    };
    assert_eq!(auto.container.left, Some(2.54));
    assert_eq!(auto.container.top, Some(2.54));
    assert_eq!(auto.container.right, Some(2.54));
    assert_eq!(auto.container.bottom, Some(1.5));
    assert_eq!(
        auto.signature_rectangle_size,
        VisualSize {
            width: 5.0,
            height: 3.0
        }
    );
}

#[test]
fn test_plain_preset_is_used_unchanged() {
    let positioning = PositioningRequest::NewPage
        .resolve(Some(new_page_preset()))
        .unwrap();

    assert_eq!(positioning, new_page_preset());
}

#[test]
fn test_preset_without_resolution_fails() {
    assert_eq!(
        PositioningRequest::Footnote.resolve(None),
        Err(PositioningError::UnresolvedPreset(PositioningPreset::Footnote))
    );
}

#[test]
fn test_auto_allocate_counts_pages_from_end() {
    let request = PositioningRequest::AutoAllocate {
        page_number: -1,
        measurement_units: MeasurementUnits::Centimeters,
        container: VisualRectangle::default()
            .horizontal_stretch(2.54, 2.54)
            .height_bottom_anchored(12.31, 2.54),
        signature_rectangle_size: VisualSize {
            width: 5.0,
            height: 3.0,
        },
        row_spacing: 1.0,
    };

    assert_eq!(request.preset(), None);
    let positioning = request.resolve(None).unwrap();
    assert_eq!(positioning.page_number, -1);
}

#[rstest]
#[case(VisualRectangle::default().height_centered(3.0), PositioningError::Undetermined(Axis::Horizontal))]
#[case(VisualRectangle { left: Some(1.0), ..Default::default() }.height_centered(3.0), PositioningError::Undetermined(Axis::Horizontal))]
#[case(VisualRectangle::default().width_centered(3.0), PositioningError::Undetermined(Axis::Vertical))]
#[case(
    VisualRectangle::default().width_left_anchored(5.0, 1.0).height_centered(1.0).with_margins(&Margins { right: Some(1.0), ..Default::default() }),
    PositioningError::OverDetermined(Axis::Horizontal)
)]
#[case(
    VisualRectangle::default().width_centered(-1.0).height_centered(1.0),
    PositioningError::InvalidValue { field: "width", value: -1.0 }
)]
fn test_invalid_rectangles(#[case] rectangle: VisualRectangle, #[case] expected: PositioningError) {
    assert_eq!(rectangle.validate(), Err(expected));
}

#[rstest]
#[case(VisualRectangle::default().width_centered(5.0).height_centered(3.0))]
#[case(VisualRectangle::default().width_right_anchored(5.0, 1.0).height_top_anchored(3.0, 1.0))]
#[case(VisualRectangle::default().horizontal_stretch(1.0, 1.0).vertical_stretch(1.0, 1.0))]
fn test_valid_rectangles(#[case] rectangle: VisualRectangle) {
    assert_eq!(rectangle.validate(), Ok(()));
}

#[test]
fn test_positioning_request_from_config() {
    let request: PositioningRequest = serde_json::from_str(
        r#"{"type": "FOOTNOTE_CUSTOM", "left": 2.54, "bottom": 2.54, "right": 2.54}"#,
    )
    .unwrap();

    assert_eq!(
        request,
        PositioningRequest::FootnoteCustom {
            margins: Margins {
                left: Some(2.54),
                top: None,
                right: Some(2.54),
                bottom: Some(2.54),
            }
        }
    );

    let request: PositioningRequest = serde_json::from_str(
        r#"{
            "type": "MANUAL",
            "pageNumber": 0,
            "rectangle": {"width": 5.0, "left": 2.54, "height": 3.0, "bottom": 2.54}
        }"#,
    )
    .unwrap();
    assert_eq!(request.preset(), None);
}
