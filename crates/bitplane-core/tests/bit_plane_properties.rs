use bitplane_core::*;

/// covers every sample value once per channel, row by row
fn gradient(layout: ChannelLayout) -> Image {
    Image::from_fn(16, 16, layout, |x, y, c| {
        ((x + 16 * y) as usize + 85 * c) as u8
    })
    .expect("Cannot create gradient")
}

fn inverted(image: &Image) -> Image {
    let samples = image.samples().iter().map(|&s| 255 - s).collect();
    Image::new(image.width(), image.height(), image.layout(), samples).expect("Cannot invert image")
}

#[test]
fn eight_bits_should_round_trip_bit_exact() {
    for layout in [ChannelLayout::Rgb, ChannelLayout::Gray] {
        let carrier = inverted(&gradient(layout));
        let payload = gradient(layout);

        let stego = embed(&carrier, &payload, BitDepth::MAX).expect("Cannot embed");
        let unveiled = extract(&stego, BitDepth::MAX, layout.into()).expect("Cannot extract");

        assert_eq!(unveiled, payload);
        let metrics = compare(&payload, &unveiled).expect("Cannot compare");
        assert_eq!(metrics.mse, 0.0);
        assert_eq!(metrics.psnr, f64::INFINITY);
    }
}

#[test]
fn high_carrier_bits_should_survive_every_depth() {
    let carrier = gradient(ChannelLayout::Rgb);
    let payload = inverted(&carrier);

    for k in BitDepth::all() {
        let stego = embed(&carrier, &payload, k).expect("Cannot embed");
        let high = k.clear_mask();

        for ((&s, &c), &p) in stego
            .samples()
            .iter()
            .zip(carrier.samples())
            .zip(payload.samples())
        {
            assert_eq!(s & high, c & high, "carrier bits changed at k={k}");
            assert_eq!(s & k.payload_mask(), p >> k.carrier_bits(), "payload bits wrong at k={k}");
        }
    }
}

#[test]
fn extraction_should_zero_the_low_bits() {
    let stego = gradient(ChannelLayout::Rgb);

    for k in BitDepth::all().filter(|k| k.get() < 8) {
        let unveiled = extract(&stego, k, OutputMode::Rgb).expect("Cannot extract");
        let low_carrier_bits = (1_u8 << k.carrier_bits()) - 1;

        assert!(
            unveiled.samples().iter().all(|&s| s & low_carrier_bits == 0),
            "low bits set at k={k}"
        );
    }
}

#[test]
fn unveiled_payload_error_should_be_bounded_by_the_truncation() {
    let carrier = gradient(ChannelLayout::Gray);
    let payload = inverted(&carrier);

    for k in BitDepth::all() {
        let stego = embed(&carrier, &payload, k).expect("Cannot embed");
        let unveiled = extract(&stego, k, OutputMode::Grayscale).expect("Cannot extract");

        for (&u, &p) in unveiled.samples().iter().zip(payload.samples()) {
            assert!(u <= p && p - u <= k.max_sample_error(), "k={k}: {u} vs {p}");
        }
    }
}

#[test]
fn carrier_distortion_should_not_grow_when_depth_shrinks() {
    let carrier = gradient(ChannelLayout::Rgb);
    let payload = inverted(&carrier);

    let mse: Vec<f64> = BitDepth::all()
        .map(|k| {
            let stego = embed(&carrier, &payload, k).expect("Cannot embed");
            compare(&stego, &carrier).expect("Cannot compare").mse
        })
        .collect();

    for pair in mse.windows(2) {
        assert!(pair[0] <= pair[1], "MSE not monotonic: {mse:?}");
    }
    assert!(mse[0] > 0.0);
}

#[test]
fn recovery_fidelity_should_improve_with_depth() {
    let payload = gradient(ChannelLayout::Rgb);
    let carrier = inverted(&payload);

    let labels: Vec<QualityLabel> = BitDepth::all()
        .map(|k| {
            let stego = embed(&carrier, &payload, k).expect("Cannot embed");
            let unveiled = extract(&stego, k, OutputMode::Rgb).expect("Cannot extract");
            classify(compare(&payload, &unveiled).expect("Cannot compare"))
        })
        .collect();

    for pair in labels.windows(2) {
        assert!(pair[0] <= pair[1], "quality not monotonic: {labels:?}");
    }
    assert_eq!(labels[7], QualityLabel::Excellent);
}

#[test]
fn differing_width_should_fail_with_shape_mismatch() {
    let a = Image::filled(4, 4, ChannelLayout::Rgb, 1).unwrap();
    let b = Image::filled(5, 4, ChannelLayout::Rgb, 1).unwrap();

    assert!(matches!(embed(&a, &b, 2), Err(BitPlaneError::ShapeMismatch { .. })));
    assert!(matches!(compare(&a, &b), Err(BitPlaneError::ShapeMismatch { .. })));
}

#[test]
fn depth_zero_and_nine_should_be_rejected() {
    let image = gradient(ChannelLayout::Gray);

    for k in [0, 9] {
        assert!(matches!(embed(&image, &image, k), Err(BitPlaneError::InvalidBitDepth(_))));
        assert!(matches!(
            extract(&image, k, OutputMode::Grayscale),
            Err(BitPlaneError::InvalidBitDepth(_))
        ));
    }
}

#[test]
fn two_by_two_scenario_should_match_the_hand_computation() {
    let carrier = Image::filled(2, 2, ChannelLayout::Rgb, 200).unwrap();
    let payload = Image::filled(2, 2, ChannelLayout::Rgb, 100).unwrap();
    let k = BitDepth::new(4).unwrap();

    assert_eq!(k.clear_mask(), 240);
    assert_eq!(200_u8 & k.clear_mask(), 192);
    assert_eq!((100_u8 >> k.carrier_bits()) & k.payload_mask(), 6);

    let stego = embed(&carrier, &payload, k).unwrap();
    assert_eq!(stego.samples(), &[198; 12]);

    let unveiled = extract(&stego, k, OutputMode::Rgb).unwrap();
    assert_eq!(k.payload_mask(), 15);
    assert_eq!(unveiled.samples(), &[96; 12]);
}

#[test]
fn classification_boundaries() {
    let depth = |k: u8| classify(BitDepth::new(k).unwrap());
    let psnr = |p: f64| classify(QualityBasis::Psnr(p));

    assert_eq!(depth(6), QualityLabel::Excellent);
    assert_eq!(depth(5), QualityLabel::Good);
    assert_eq!(depth(3), QualityLabel::Fair);
    assert_eq!(depth(1), QualityLabel::Poor);

    assert_eq!(psnr(41.0), QualityLabel::Excellent);
    assert_eq!(psnr(40.0), QualityLabel::Good);
    assert_eq!(psnr(30.0), QualityLabel::Good);
    assert_eq!(psnr(30.0001), QualityLabel::Good);
    assert_eq!(psnr(20.0), QualityLabel::Poor);
}

#[test]
fn images_should_be_shareable_across_threads() {
    let carrier = gradient(ChannelLayout::Rgb);
    let payload = inverted(&carrier);

    let results: Vec<Image> = std::thread::scope(|s| {
        let handles: Vec<_> = BitDepth::all()
            .map(|k| {
                let (carrier, payload) = (&carrier, &payload);
                s.spawn(move || embed(carrier, payload, k).expect("Cannot embed"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (k, stego) in BitDepth::all().zip(&results) {
        assert_eq!(stego, &embed(&carrier, &payload, k).unwrap());
    }
}
