use itertools::Itertools;

use super::{BoundingBox, OtpEndpoint, OtpQuery, OtpService};

/// the kinds of OTP request this toolkit issues. each appends its own fields
/// after the shared query block.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpRequest {
    Plan,
    RasterIsochrone {
        bbox: BoundingBox,
        resolution: f64,
    },
    VectorIsochrone {
        walk_time_minutes: u32,
        output: String,
    },
}

impl OtpRequest {
    pub fn service(&self) -> OtpService {
        match self {
            OtpRequest::Plan => OtpService::Plan,
            OtpRequest::RasterIsochrone { .. } => OtpService::Wms,
            OtpRequest::VectorIsochrone { .. } => OtpService::Iso,
        }
    }

    fn extra_pairs(&self) -> Vec<(String, String)> {
        match self {
            OtpRequest::Plan => vec![],
            OtpRequest::RasterIsochrone { bbox, resolution } => vec![
                (String::from("format"), String::from("image/geotiff")),
                (String::from("srs"), String::from("EPSG:4326")),
                (String::from("resolution"), resolution.to_string()),
                (String::from("bbox"), bbox.to_string()),
            ],
            OtpRequest::VectorIsochrone {
                walk_time_minutes,
                output,
            } => vec![
                (String::from("walkTime"), walk_time_minutes.to_string()),
                (String::from("output"), output.clone()),
            ],
        }
    }
}

/// builds a full OTP request URL. `routerId` is appended last when present.
pub fn build_request_url(
    endpoint: &OtpEndpoint,
    request: &OtpRequest,
    query: &OtpQuery,
    router_id: Option<&str>,
) -> String {
    let mut pairs = query.query_pairs();
    pairs.extend(request.extra_pairs());
    if let Some(router_id) = router_id {
        pairs.push((String::from("routerId"), router_id.to_string()));
    }
    let query_string = pairs.iter().map(|(k, v)| format!("{k}={v}")).join("&");
    format!("{}?{}", endpoint.service_url(request.service()), query_string)
}

pub fn build_plan_url(endpoint: &OtpEndpoint, query: &OtpQuery, router_id: Option<&str>) -> String {
    build_request_url(endpoint, &OtpRequest::Plan, query, router_id)
}

pub fn build_raster_isochrone_url(
    endpoint: &OtpEndpoint,
    query: &OtpQuery,
    bbox: BoundingBox,
    resolution: f64,
    router_id: Option<&str>,
) -> String {
    let request = OtpRequest::RasterIsochrone { bbox, resolution };
    build_request_url(endpoint, &request, query, router_id)
}

pub fn build_vector_isochrone_url(
    endpoint: &OtpEndpoint,
    query: &OtpQuery,
    walk_time_minutes: u32,
    output: &str,
    router_id: Option<&str>,
) -> String {
    let request = OtpRequest::VectorIsochrone {
        walk_time_minutes,
        output: output.to_string(),
    };
    build_request_url(endpoint, &request, query, router_id)
}

/// a link that opens the trip in the OTP web planner app, for checking a
/// result by hand. the planner takes `MM-DD-YYYY` dates and `h:mmam` times.
pub fn build_web_planner_url(web_app_url: &str, query: &OtpQuery) -> String {
    let mut pairs = query.place_pairs();
    pairs.push((String::from("date"), query.date.format("%m-%d-%Y").to_string()));
    pairs.push((String::from("time"), query.time.format("%-I:%M%P").to_string()));
    let query_string = pairs.iter().map(|(k, v)| format!("{k}={v}")).join("&");
    format!("{}/#/submit&{}", web_app_url.trim_end_matches('/'), query_string)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{ParameterValue, RoutingParameters};
    use chrono::{NaiveDate, NaiveTime};
    use geo::Point;

    fn params() -> RoutingParameters {
        RoutingParameters::new()
            .with("mode", ParameterValue::from("TRANSIT,WALK"))
            .with("maxTransfers", ParameterValue::from(4i64))
    }

    fn query(params: &RoutingParameters) -> OtpQuery<'_> {
        OtpQuery {
            routing_params: params,
            date: NaiveDate::from_ymd_opt(2013, 5, 6).unwrap(),
            time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            origin: Point::new(144.9631, -37.8136),
            destination: Point::new(145.1316, -37.9143),
        }
    }

    #[test]
    fn test_plan_url() {
        let endpoint = OtpEndpoint::new("http://localhost:8080");
        let params = params();
        let url = build_plan_url(&endpoint, &query(&params), Some("melbourne"));
        assert_eq!(
            url,
            "http://localhost:8080/opentripplanner-api-webapp/ws/plan?mode=TRANSIT%2CWALK&maxTransfers=4\
             &fromPlace=-37.8136,144.9631&toPlace=-37.9143,145.1316&time=2013-05-06T08%3A30%3A00&routerId=melbourne"
        );
    }

    #[test]
    fn test_raster_url_appends_raster_fields_before_router() {
        let endpoint = OtpEndpoint::new("http://localhost:8080/");
        let params = params();
        let location = Point::new(145.0, -37.5);
        let q = OtpQuery::at_location(
            &params,
            NaiveDate::from_ymd_opt(2013, 5, 6).unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            location,
        );
        let bbox = BoundingBox::around(&location, (0.5, 0.25)).unwrap();
        let url = build_raster_isochrone_url(&endpoint, &q, bbox, 0.01, None);
        assert!(url.starts_with("http://localhost:8080/opentripplanner-api-webapp/ws/wms?"));
        assert!(url.contains("&fromPlace=-37.5,145&toPlace=-37.5,145&"));
        assert!(url.ends_with(
            "&format=image/geotiff&srs=EPSG:4326&resolution=0.01&bbox=144.5,-37.75,145.5,-37.25"
        ));
        assert!(!url.contains("routerId"));
    }

    #[test]
    fn test_vector_url() {
        let endpoint = OtpEndpoint::new("http://localhost:8080");
        let params = RoutingParameters::new();
        let url = build_vector_isochrone_url(&endpoint, &query(&params), 30, "POLYGON", Some("g"));
        assert!(url.contains("/ws/iso?fromPlace="));
        assert!(url.ends_with("&walkTime=30&output=POLYGON&routerId=g"));
    }

    #[test]
    fn test_web_planner_url() {
        let params = params();
        let url = build_web_planner_url("http://localhost:8080/otp", &query(&params));
        assert!(url.starts_with("http://localhost:8080/otp/#/submit&mode="));
        assert!(url.ends_with("&date=05-06-2013&time=8:30am"));
    }
}
