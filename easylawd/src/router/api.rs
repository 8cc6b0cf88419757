use easylaw_api::request::{ParamError, QueryParams};
use easylaw_api::status::StatusCode;
use easylaw_query::{
    Collection, CollectionSearch, ConseilParams, ConstitutionParams, LawsParams, Pagination,
    SupremeCourtParams, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
use tracing::{error, warn};

use crate::proto::http::{Request, Response};
use crate::search::{self, SearchError};
use crate::services::Services;

use super::util::{error_response, json_value};

const DEFAULT_SORT: &str = "relevance";

pub(crate) async fn handle_collection(
    collection: Collection,
    req: &Request,
    services: &Services,
) -> Response {
    let q = QueryParams::parse(req.query().unwrap_or(""));
    let max = services.max_per_page();
    let outcome = match collection {
        Collection::SupremeCourt => execute(services, supreme_court_params(&q, max)).await,
        Collection::Laws => execute(services, laws_params(&q, max)).await,
        Collection::Constitution => execute(services, constitution_params(&q, max)).await,
        Collection::Conseil => execute(services, conseil_params(&q, max)).await,
    };
    match outcome {
        Ok(resp) => json_value(StatusCode::Ok, &resp),
        Err(e) if e.is_client_error() => {
            warn!(target: "easylawd", route = collection.route(), "rejected parameters: {e}");
            error_response(StatusCode::BadRequest, &e.to_string())
        }
        Err(e) => {
            error!(
                target: "easylawd",
                index = collection.index_name(),
                engine = services.engine().engine_name(),
                "search failed: {e}"
            );
            error_response(StatusCode::InternalServerError, "search backend unavailable")
        }
    }
}

async fn execute<P: CollectionSearch>(
    services: &Services,
    params: Result<P, SearchError>,
) -> Result<easylaw_api::response::SearchResponse, SearchError> {
    let params = params?;
    search::run(services.engine(), &params).await
}

fn pagination(q: &QueryParams, max_per_page: u32) -> Result<Pagination, SearchError> {
    let page = q.count_or("page", DEFAULT_PAGE)?;
    let per_page = q.count_or("per_page", DEFAULT_PER_PAGE)?;
    if max_per_page > 0 && per_page > max_per_page {
        return Err(ParamError::TooLarge {
            name: "per_page".to_string(),
            max: max_per_page,
            value: per_page,
        }
        .into());
    }
    Ok(Pagination::new(page, per_page)?)
}

fn supreme_court_params(q: &QueryParams, max: u32) -> Result<SupremeCourtParams, SearchError> {
    Ok(SupremeCourtParams {
        search_query: q.text_or("search_query", ""),
        pagination: pagination(q, max)?,
        start_date: q.text("start_date"),
        end_date: q.text("end_date"),
        search_field: q.text("search_field"),
        subject: q.text("subject"),
        number: q.int("number")?,
        sort_by: q.text_or("sort_by", DEFAULT_SORT),
    })
}

fn laws_params(q: &QueryParams, max: u32) -> Result<LawsParams, SearchError> {
    Ok(LawsParams {
        search_query: q.text_or("search_query", ""),
        pagination: pagination(q, max)?,
        signature_start_date: q.text("signature_start_date"),
        signature_end_date: q.text("signature_end_date"),
        journal_start_date: q.text("journal_start_date"),
        journal_end_date: q.text("journal_end_date"),
        text_type: q.text("text_type"),
        text_number: q.text("text_number"),
        ministry: q.text("ministry"),
        field: q.text("field"),
        sort_by: q.text_or("sort_by", DEFAULT_SORT),
    })
}

fn constitution_params(q: &QueryParams, max: u32) -> Result<ConstitutionParams, SearchError> {
    Ok(ConstitutionParams {
        search_query: q.text_or("search_query", ""),
        pagination: pagination(q, max)?,
        section_name: q.text("section_name"),
        chapter_name: q.text("chapter_name"),
        section_number: q.int("section_number")?,
        chapter_number: q.int("chapter_number")?,
        article_number: q.int("article_number")?,
    })
}

fn conseil_params(q: &QueryParams, max: u32) -> Result<ConseilParams, SearchError> {
    Ok(ConseilParams {
        search_query: q.text_or("search_query", ""),
        pagination: pagination(q, max)?,
        number: q.int("number")?,
        chamber: q.text("chamber"),
        section: q.text("section"),
        procedure: q.text("procedure"),
        start_date: q.text("start_date"),
        end_date: q.text("end_date"),
        sort_by: q.text_or("sort_by", DEFAULT_SORT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_missing() {
        let p = supreme_court_params(&QueryParams::parse(""), 100).unwrap();
        assert_eq!(p.search_query, "");
        assert_eq!(p.pagination, Pagination::default());
        assert_eq!(p.sort_by, "relevance");
        assert_eq!(p.number, None);
    }

    #[test]
    fn per_page_cap_is_enforced() {
        let q = QueryParams::parse("per_page=101");
        let err = laws_params(&q, 100).expect_err("over the cap");
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "parameter 'per_page' must be at most 100, got 101");
        assert!(laws_params(&q, 0).is_ok());
    }

    #[test]
    fn zero_page_is_rejected() {
        let err = conseil_params(&QueryParams::parse("page=0"), 100).expect_err("page 0");
        assert_eq!(err.to_string(), "page must be at least 1");
    }

    #[test]
    fn typed_filters_must_be_integers() {
        let q = QueryParams::parse("article_number=IV");
        assert!(matches!(
            constitution_params(&q, 100),
            Err(SearchError::Param(ParamError::NotAnInteger { .. }))
        ));
    }
}
