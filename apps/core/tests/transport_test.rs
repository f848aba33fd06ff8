use quickpick_core::config::Config;
use quickpick_core::contract::{
    CommandItemDto, CoreRequest, CoreResponse, KeyEventRequest, QueryRequest, SelectRequest,
    SetCandidatesRequest,
};
use quickpick_core::history;
use quickpick_core::service::PaletteService;
use quickpick_core::transport::{handle_json, handle_request, ErrorCode, TransportResponse};

fn seeded_service() -> PaletteService {
    let mut service =
        PaletteService::with_connection(Config::default(), history::open_memory().unwrap())
            .expect("service should initialize");
    let seed = CoreRequest::SetCandidates(SetCandidatesRequest {
        library: vec![CommandItemDto {
            key: "btn".into(),
            label: "Button".into(),
        }],
        existing: vec![CommandItemDto {
            key: "inst-1".into(),
            label: "Header Instance".into(),
        }],
    });
    service.handle_command(seed).expect("candidates should seed");
    service
}

#[test]
fn request_handler_returns_ok_transport_response() {
    let mut service = seeded_service();

    let response = handle_request(
        &mut service,
        CoreRequest::Query(QueryRequest {
            query: "but".into(),
        }),
    );

    match response {
        TransportResponse::Ok { response } => {
            let encoded = serde_json::to_string(&TransportResponse::Ok { response }).unwrap();
            assert!(encoded.contains("\"status\":\"ok\""));
        }
        _ => panic!("expected ok transport response"),
    }
}

#[test]
fn json_handler_returns_invalid_json_error_code() {
    let mut service = seeded_service();

    let raw = handle_json(&mut service, "{not-json");
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();

    match parsed {
        TransportResponse::Err { error } => assert_eq!(error.code, ErrorCode::InvalidJson),
        _ => panic!("expected invalid json error"),
    }
}

#[test]
fn json_handler_returns_invalid_request_error_code() {
    let mut service = seeded_service();
    let request = CoreRequest::Select(SelectRequest { key: "   ".into() });

    let raw = handle_json(&mut service, &serde_json::to_string(&request).unwrap());
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();

    match parsed {
        TransportResponse::Err { error } => assert_eq!(error.code, ErrorCode::InvalidRequest),
        _ => panic!("expected invalid request error"),
    }
}

#[test]
fn chord_query_select_flow_round_trips_over_json() {
    let mut service = seeded_service();

    let press = CoreRequest::Key(KeyEventRequest {
        key: "k".into(),
        primary: false,
        secondary: true,
        shift: false,
        alt: false,
    });
    let raw = handle_json(&mut service, &serde_json::to_string(&press).unwrap());
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();
    match parsed {
        TransportResponse::Ok {
            response: CoreResponse::Key(key),
        } => {
            assert!(key.consumed);
            assert!(key.open);
        }
        other => panic!("expected key response, got {other:?}"),
    }

    let query = CoreRequest::Query(QueryRequest {
        query: "but".into(),
    });
    let raw = handle_json(&mut service, &serde_json::to_string(&query).unwrap());
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();
    match parsed {
        TransportResponse::Ok {
            response: CoreResponse::View(view),
        } => {
            let encoded = serde_json::to_string(&view).unwrap();
            assert!(encoded.contains("\"state\":\"empty\""));
            assert!(encoded.contains("\"key\":\"btn\""));
        }
        other => panic!("expected view response, got {other:?}"),
    }

    let select = CoreRequest::Select(SelectRequest { key: "btn".into() });
    let raw = handle_json(&mut service, &serde_json::to_string(&select).unwrap());
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();
    match parsed {
        TransportResponse::Ok {
            response: CoreResponse::Select(select),
        } => {
            assert_eq!(select.chosen.as_deref(), Some("btn"));
            assert!(!select.open);
        }
        other => panic!("expected select response, got {other:?}"),
    }
}
