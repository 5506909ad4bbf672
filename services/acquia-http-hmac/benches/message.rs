use std::collections::BTreeMap;

use bytes::Bytes;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use httphmac_acquia::{
    build_message, AuthHeader, Credential, InboundRequest, RequestSigner, RequestTarget,
    RequestVerifier,
};
use httphmac_core::{Context, SignRequest};
use once_cell::sync::Lazy;

criterion_group!(benches, bench);
criterion_main!(benches);

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

const BODY: &[u8] = br#"{"method":"hi.bob","params":["5","4","8"]}"#;

fn credential() -> Credential {
    Credential {
        id: "efdde334-fe7b-11e4-a322-1697f925ec7b".to_string(),
        secret: "W5PeGMxSItNerkNFqQMfYiJvH14WzVJMy54CPoTAYoI=".to_string(),
    }
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("acquia_http_hmac");

    group.bench_function("build_message", |b| {
        let auth = AuthHeader::new(
            "Pipet service",
            "efdde334-fe7b-11e4-a322-1697f925ec7b",
            "d1954337-5319-4821-8427-115542e08d10",
            "2.0",
        )
        .with_signed_header_names(["X-Custom-Signer1", "X-Custom-Signer2"]);
        let target = RequestTarget {
            method: "POST",
            host: "example.acquiapipet.net",
            port: None,
            path: "/v1.0/task",
            query: None,
        };
        let signed_headers = BTreeMap::from([
            ("X-Custom-Signer1".to_string(), "custom-1".to_string()),
            ("X-Custom-Signer2".to_string(), "custom-2".to_string()),
        ]);

        b.iter(|| {
            build_message(
                &target,
                &auth,
                &signed_headers,
                "1432075982",
                "application/json",
                BODY,
            )
            .expect("must success")
        })
    });

    group.bench_function("sign", |b| {
        let cred = credential();
        let s = RequestSigner::new("Pipet service");
        let ctx = Context::new();

        b.to_async(&*RUNTIME).iter(|| async {
            let req = http::Request::post("https://example.acquiapipet.net/v1.0/task")
                .header("Content-Type", "application/json")
                .body(())
                .expect("request must be valid");

            let (mut parts, _) = req.into_parts();
            s.sign_request(&ctx, &mut parts, BODY, Some(&cred))
                .await
                .expect("must success")
        })
    });

    group.bench_function("verify", |b| {
        let cred = credential();
        let req = http::Request::post("/v1.0/task")
            .header("Host", "example.acquiapipet.net")
            .header("X-Authorization-Timestamp", "1432075982")
            .header("Content-Type", "application/json")
            .header("X-Custom-Signer1", "custom-1")
            .header("X-Custom-Signer2", "custom-2")
            .header(
                "Authorization",
                r#"acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="d1954337-5319-4821-8427-115542e08d10",version="2.0",headers="X-Custom-Signer1;X-Custom-Signer2",signature="cukuoh4rfezX6guHI1nm5DVygQIPftKBTEdEjG1ZO70=""#,
            )
            .body(Bytes::from_static(BODY))
            .expect("request must be valid");
        let verifier = RequestVerifier::new();

        b.iter(|| {
            let facts = InboundRequest::new(&req).expect("request must have host");
            verifier.verify(&facts, &cred).expect("must success")
        })
    });

    group.finish()
}
