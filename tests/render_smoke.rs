use image::GenericImageView;
use yeardots::{render, render_today, RenderRequest};

#[test]
fn smoke_render_default_request() {
    let request = RenderRequest::default();
    let w = render(&request, 120, 365).expect("render");
    assert_eq!(w.width, request.width);
    assert_eq!(w.height, request.height);
    // PNG signature
    assert_eq!(&w.png_data[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn smoke_render_today() {
    let request = RenderRequest::from_parts(Some(400), Some(400), None, None, None, None);
    let w = render_today(&request).expect("render");
    assert_eq!((w.width, w.height), (400, 400));
    assert!(!w.png_data.is_empty());
}

#[test]
fn decoded_dimensions_match_request() {
    let request = RenderRequest::from_parts(Some(320), Some(240), None, None, None, None);
    let w = render(&request, 1, 365).expect("render");
    let img = image::load_from_memory(&w.png_data).expect("decode");
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 240);
}

#[test]
fn first_and_last_days_render() {
    let request = RenderRequest::default();
    render(&request, 1, 365).expect("first day");
    render(&request, 365, 365).expect("last day");
    render(&request, 366, 366).expect("leap year last day");
}
