use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::Request;
use httphmac_acquia::{
    Config, Credential, InboundRequest, RequestSigner, RequestVerifier, StaticCredentialProvider,
    ACQUIA_HMAC_ID, ACQUIA_HMAC_REALM, ACQUIA_HMAC_SECRET, ACQUIA_HMAC_VERSION,
};
use httphmac_core::{Context, ErrorKind, Result, Signer, StaticEnv};
use log::debug;
use std::collections::HashMap;

const ID: &str = "efdde334-fe7b-11e4-a322-1697f925ec7b";
const SECRET: &str = "W5PeGMxSItNerkNFqQMfYiJvH14WzVJMy54CPoTAYoI=";

fn init_signer() -> Signer<Credential> {
    let _ = env_logger::builder().is_test(true).try_init();

    let context = Context::new().with_env(StaticEnv {
        envs: HashMap::new(),
    });
    let loader = StaticCredentialProvider::new(ID, SECRET);
    let builder = RequestSigner::new("Pipet service")
        .with_signed_headers(["X-Custom-Signer1", "X-Custom-Signer2"]);

    Signer::new(context, loader, builder)
}

fn credential() -> Credential {
    Credential {
        id: ID.to_string(),
        secret: SECRET.to_string(),
    }
}

/// Sign `req` with `body` and hand back what a server would receive.
async fn sign(req: Request<()>, body: &'static [u8]) -> Result<Request<Bytes>> {
    let (mut parts, _) = req.into_parts();
    init_signer().sign(&mut parts, body).await?;

    let req = Request::from_parts(parts, Bytes::from_static(body));
    debug!("signed request: {:?}", req);
    Ok(req)
}

fn verify(req: &Request<Bytes>) -> Result<httphmac_acquia::AuthHeader> {
    RequestVerifier::new()
        .with_realm("Pipet service")
        .verify(&InboundRequest::new(req)?, &credential())
}

fn post() -> Request<()> {
    Request::post("https://example.acquiapipet.net:8443/v1.0/task?b=2&a=hello%20world")
        .header("Content-Type", "application/json")
        .header("X-Custom-Signer1", "custom-1")
        .header("X-Custom-Signer2", "custom-2")
        .body(())
        .expect("request must be valid")
}

const BODY: &[u8] = br#"{"method":"hi.bob","params":["5","4","8"]}"#;

#[tokio::test]
async fn test_sign_then_verify_get() -> Result<()> {
    let req = Request::get("https://example.acquiapipet.net/v1.0/task-status/133?limit=10")
        .body(())?;
    let req = sign(req, b"").await?;

    let auth = verify(&req)?;
    assert_eq!(auth.id(), Some(ID));
    assert_eq!(auth.version(), Some("2.0"));
    assert!(req.headers().contains_key("x-authorization-timestamp"));
    Ok(())
}

#[tokio::test]
async fn test_sign_then_verify_post() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let auth = verify(&req)?;
    assert_eq!(
        auth.signed_header_names(),
        ["X-Custom-Signer1", "X-Custom-Signer2"]
    );
    Ok(())
}

#[tokio::test]
async fn test_verify_behind_proxy_host_header() -> Result<()> {
    let req = sign(post(), BODY).await?;

    // A server sees an origin-form uri with the authority in `Host`.
    let (mut parts, body) = req.into_parts();
    parts
        .headers
        .insert("host", "example.acquiapipet.net:8443".parse()?);
    parts.uri = "/v1.0/task?b=2&a=hello%20world".parse()?;
    let req = Request::from_parts(parts, body);

    verify(&req)?;
    Ok(())
}

#[tokio::test]
async fn test_tampered_body() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let (parts, _) = req.into_parts();
    let req = Request::from_parts(parts, Bytes::from_static(br#"{"method":"hi.eve"}"#));

    let err = verify(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    Ok(())
}

#[tokio::test]
async fn test_tampered_path() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let (mut parts, body) = req.into_parts();
    parts.uri = "https://example.acquiapipet.net:8443/v1.0/other?b=2&a=hello%20world".parse()?;
    let req = Request::from_parts(parts, body);

    let err = verify(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    Ok(())
}

#[tokio::test]
async fn test_tampered_signed_header() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let (mut parts, body) = req.into_parts();
    parts
        .headers
        .insert("x-custom-signer2", "custom-3".parse()?);
    let req = Request::from_parts(parts, body);

    let err = verify(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    Ok(())
}

#[tokio::test]
async fn test_unsigned_header_is_free_to_change() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let (mut parts, body) = req.into_parts();
    parts.headers.insert("x-trace-id", "abc".parse()?);
    let req = Request::from_parts(parts, body);

    verify(&req)?;
    Ok(())
}

#[tokio::test]
async fn test_tampered_timestamp() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let (mut parts, body) = req.into_parts();
    parts
        .headers
        .insert("x-authorization-timestamp", "1".parse()?);
    let req = Request::from_parts(parts, body);

    let err = verify(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    Ok(())
}

#[tokio::test]
async fn test_wrong_secret() -> Result<()> {
    let req = sign(post(), BODY).await?;

    let cred = Credential {
        id: ID.to_string(),
        secret: "c29tZS1vdGhlci1zZWNyZXQ=".to_string(),
    };
    let err = RequestVerifier::new()
        .verify(&InboundRequest::new(&req)?, &cred)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    Ok(())
}

#[tokio::test]
async fn test_authorization_is_sensitive() -> Result<()> {
    let req = sign(post(), BODY).await?;
    assert!(req.headers()[AUTHORIZATION].is_sensitive());
    Ok(())
}

#[test]
fn test_config_from_public_env_names() {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            (ACQUIA_HMAC_ID.to_string(), ID.to_string()),
            (ACQUIA_HMAC_SECRET.to_string(), SECRET.to_string()),
            (ACQUIA_HMAC_REALM.to_string(), "Pipet service".to_string()),
            (ACQUIA_HMAC_VERSION.to_string(), "2.0".to_string()),
        ]),
    });

    let config = Config::default().from_env(&ctx);
    assert_eq!(config.id.as_deref(), Some(ID));
    assert_eq!(config.secret.as_deref(), Some(SECRET));
    assert_eq!(config.realm.as_deref(), Some("Pipet service"));
    assert_eq!(config.version(), "2.0");
}
