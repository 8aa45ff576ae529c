use {
    crate::house::service::Service,
    axum_prometheus::metrics_exporter_prometheus::PrometheusHandle,
};

pub struct Store {
    pub house_service:    Service,
    pub metrics_recorder: PrometheusHandle,
}
