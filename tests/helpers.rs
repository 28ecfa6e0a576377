use http::header::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use http::StatusCode;
use http_responses::{
    bad_request, created, forbidden, no_content, not_found, ok, redirect, response, unauthorized,
    BodyInit, Cookie, CreatedOptions, FormData, Options, RedirectOptions, Response,
    ResponseOptions, SameSite, UrlSearchParams,
};
use serde::Serialize;
use serde_json::json;

fn body_text(res: Response) -> anyhow::Result<String> {
    Ok(res.into_body().into_text()?)
}

#[test]
fn helpers_use_their_fixed_status() -> anyhow::Result<()> {
    let cases = [
        (ok((), Options::new())?, StatusCode::OK),
        (created((), CreatedOptions::new())?, StatusCode::CREATED),
        (no_content(Options::new())?, StatusCode::NO_CONTENT),
        (redirect("/", RedirectOptions::new())?, StatusCode::FOUND),
        (bad_request((), Options::new())?, StatusCode::BAD_REQUEST),
        (unauthorized((), Options::new())?, StatusCode::UNAUTHORIZED),
        (forbidden((), Options::new())?, StatusCode::FORBIDDEN),
        (not_found((), Options::new())?, StatusCode::NOT_FOUND),
    ];

    for (res, expected) in cases {
        assert_eq!(res.status(), expected);
        assert_eq!(res.status_text(), expected.canonical_reason().unwrap());
    }
    Ok(())
}

#[test]
fn no_content_never_has_a_body() -> anyhow::Result<()> {
    let res = no_content(Options::new().cookie(Cookie::new("seen", "1")))?;
    assert!(res.body().is_empty());
    assert_eq!(res.headers()[SET_COOKIE], "seen=1");
    Ok(())
}

#[test]
fn redirect_sets_location() -> anyhow::Result<()> {
    let res = redirect("https://example.com/next", RedirectOptions::new())?;
    assert_eq!(res.status().as_u16(), 302);
    assert_eq!(res.headers()[LOCATION], "https://example.com/next");
    assert!(res.body().is_empty());

    let res = redirect("/permanent", RedirectOptions::new().status(301))?;
    assert_eq!(res.status().as_u16(), 301);
    assert_eq!(res.headers()[LOCATION], "/permanent");
    Ok(())
}

#[test]
fn redirect_accepts_urls() -> anyhow::Result<()> {
    let url = url::Url::parse("https://example.com/a b")?;
    let res = redirect(&url, RedirectOptions::new().status(307))?;
    assert_eq!(res.headers()[LOCATION], "https://example.com/a%20b");
    Ok(())
}

#[test]
fn every_cookie_gets_its_own_header() -> anyhow::Result<()> {
    let cookies = vec![
        Cookie::new("a", "1"),
        Cookie::build(("b", "2")).path("/").into(),
        Cookie::build(("c", "3"))
            .http_only(true)
            .same_site(SameSite::Strict)
            .into(),
    ];
    let expected: Vec<String> = cookies.iter().map(|c| c.to_string()).collect();

    let res = ok("hi", Options::new().cookies(cookies))?;
    let values: Vec<&str> = res
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str())
        .collect::<Result<_, _>>()?;

    assert_eq!(values, expected);
    Ok(())
}

#[test]
fn objects_are_sent_as_json() -> anyhow::Result<()> {
    let res = ok(json!({ "a": 1 }), Options::new())?;
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(body_text(res)?, r#"{"a":1}"#);
    Ok(())
}

#[test]
fn serializable_structs_are_sent_as_json() -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Item {
        id: u32,
        tags: Vec<&'static str>,
    }

    let body = BodyInit::serialize(&Item {
        id: 5,
        tags: vec!["new"],
    })?;
    let res = created(body, CreatedOptions::new().location("/items/5"))?;
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(body_text(res)?, r#"{"id":5,"tags":["new"]}"#);
    Ok(())
}

#[test]
fn serialized_strings_stay_quoted_json() -> anyhow::Result<()> {
    #[derive(Serialize)]
    enum State {
        Active,
    }

    let res = ok(BodyInit::serialize(&State::Active)?, Options::new())?;
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(body_text(res)?, r#""Active""#);

    let res = ok(BodyInit::serialize(&None::<u32>)?, Options::new())?;
    assert!(res.body().is_empty());
    Ok(())
}

#[test]
fn text_is_not_reencoded() -> anyhow::Result<()> {
    let res = ok("hello", Options::new())?;
    assert_eq!(res.headers()[CONTENT_TYPE], "text/plain;charset=UTF-8");
    assert_eq!(body_text(res)?, "hello");
    Ok(())
}

#[test]
fn created_points_at_the_resource() -> anyhow::Result<()> {
    let res = created("made", CreatedOptions::new().location("/items/5"))?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()[LOCATION], "/items/5");
    Ok(())
}

#[test]
fn forms_pass_through_with_their_encoding() -> anyhow::Result<()> {
    let params = UrlSearchParams::new().append("user", "ada lovelace");
    let res = bad_request(params, Options::new())?;
    assert_eq!(
        res.headers()[CONTENT_TYPE],
        "application/x-www-form-urlencoded;charset=UTF-8"
    );
    assert_eq!(body_text(res)?, "user=ada+lovelace");

    let res = ok(FormData::new().append("field", "value"), Options::new())?;
    let content_type = res.headers()[CONTENT_TYPE].to_str()?.to_string();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("multipart content type");
    let body = body_text(res)?;
    assert!(body.starts_with(&format!("--{boundary}\r\n")));
    assert!(body.ends_with(&format!("--{boundary}--\r\n")));
    Ok(())
}

#[test]
fn binary_has_no_implicit_type() -> anyhow::Result<()> {
    let res = forbidden(vec![1u8, 2, 3], Options::new())?;
    assert!(res.headers().get(CONTENT_TYPE).is_none());
    assert_eq!(&res.into_body().into_bytes()?[..], &[1u8, 2, 3][..]);
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> anyhow::Result<()> {
    let build = || {
        unauthorized(
            json!({ "error": "token expired" }),
            Options::new()
                .header("WWW-Authenticate", "Bearer")
                .cookie(Cookie::new("session", "")),
        )
    };

    let (first, second) = (build()?, build()?);
    assert_eq!(first.status(), second.status());
    assert_eq!(first.status_text(), second.status_text());

    let headers = |res: &Response| -> Vec<(String, Vec<u8>)> {
        res.headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.as_bytes().to_vec()))
            .collect()
    };
    assert_eq!(headers(&first), headers(&second));
    assert_eq!(first.body().as_bytes(), second.body().as_bytes());

    let form = || ok(FormData::new().append("a", "1"), Options::new());
    assert_eq!(form()?.into_bytes()?, form()?.into_bytes()?);
    Ok(())
}

#[test]
fn response_takes_every_option() -> anyhow::Result<()> {
    let opts = ResponseOptions::new()
        .status(202)
        .status_text("Queued")
        .header("Retry-After", "5")
        .location("/jobs/9")
        .cookie(Cookie::new("job", "9"));
    let res = response("queued", opts)?;

    assert_eq!(res.status().as_u16(), 202);
    assert_eq!(res.status_text(), "Queued");
    assert_eq!(res.headers()["retry-after"], "5");
    assert_eq!(res.headers()[LOCATION], "/jobs/9");
    assert_eq!(res.headers()[SET_COOKIE], "job=9");
    Ok(())
}

#[test]
fn out_of_range_status_fails() {
    let res = response((), ResponseOptions::new().status(99));
    assert!(matches!(res, Err(http_responses::Error::StatusOutOfRange(99))));
}
