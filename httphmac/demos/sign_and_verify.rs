use anyhow::Result;
use bytes::Bytes;
use httphmac::acquia::{
    Credential, InboundRequest, RequestSigner, RequestVerifier, StaticCredentialProvider,
};
use httphmac::{default_context, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let id = "efdde334-fe7b-11e4-a322-1697f925ec7b";
    let secret = "W5PeGMxSItNerkNFqQMfYiJvH14WzVJMy54CPoTAYoI=";

    // Client side: sign the request before sending it.
    let signer = Signer::new(
        default_context(),
        StaticCredentialProvider::new(id, secret),
        RequestSigner::new("Pipet service").with_signed_headers(["X-Custom-Signer1"]),
    );

    let body = br#"{"method":"hi.bob","params":["5","4","8"]}"#;
    let (mut parts, _) = http::Request::post("https://example.acquiapipet.net/v1.0/task")
        .header("Content-Type", "application/json")
        .header("X-Custom-Signer1", "custom-1")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, body).await?;
    log::info!("authorization: {:?}", parts.headers["authorization"]);

    // Server side: re-derive the signature from what arrived.
    let req = http::Request::from_parts(parts, Bytes::from_static(body));
    let credential = Credential {
        id: id.to_string(),
        secret: secret.to_string(),
    };
    let auth = RequestVerifier::new()
        .with_realm("Pipet service")
        .verify(&InboundRequest::new(&req)?, &credential)?;

    println!("verified request from {}", auth.id().unwrap_or_default());
    Ok(())
}
